//! Move ordering heuristics
//!
//! Orders moves so that alpha-beta sees likely refutations first. The score
//! only affects how much of the tree gets pruned, never the value returned.

use std::cmp::Reverse;

use chess_core::{Move, Position};

use crate::eval::piece_value;

/// Heuristic priority of `mv` in `pos`; higher is searched first.
///
/// - Captures score `10 * victim - attacker` (MVV-LVA).
/// - Promotions add the value of the new piece.
/// - Landing on a square the opponent attacks costs the mover's value. The
///   attack test runs on the current board, before the move is made.
pub fn move_score(pos: &Position, mv: Move) -> i32 {
    let mover = pos.kind_at(mv.from).map_or(0, piece_value);
    let mut score = 0;

    if let Some(victim) = pos.kind_at(mv.to) {
        score = 10 * piece_value(victim) - mover;
    }

    if let Some(promo) = mv.promo {
        score += piece_value(promo);
    }

    if pos.is_square_attacked(mv.to, pos.side_to_move.other()) {
        score -= mover;
    }

    score
}

/// Sorts `moves` by descending `move_score`. Each score is computed once.
pub fn order_moves(pos: &Position, moves: &mut [Move]) {
    moves.sort_by_cached_key(|&mv| Reverse(move_score(pos, mv)));
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;
