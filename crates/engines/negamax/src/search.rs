//! Negamax search with alpha-beta pruning

use chess_core::{legal_moves_into, Position};

use crate::eval::MATE_VALUE;
use crate::ordering::order_moves;
use crate::quiescence::capture_search;

/// Fixed-depth fail-hard negamax.
///
/// # Arguments
/// * `pos` - Position to search; restored to its input state on return
/// * `depth` - Remaining full-width plies; at 0 the capture search takes over
/// * `ply` - Distance from the root, used to prefer shorter mates
/// * `alpha`, `beta` - Search window from the side to move's perspective
///
/// # Returns
/// A score in `[alpha, beta]`. A cutoff returns `beta` itself, never the
/// child's larger value. Checkmate scores `-MATE_VALUE + ply`, stalemate 0.
pub fn search(pos: &mut Position, depth: u8, ply: u32, mut alpha: i32, beta: i32) -> i32 {
    if depth == 0 {
        return capture_search(pos, alpha, beta, ply);
    }

    let mut moves = Vec::with_capacity(64);
    legal_moves_into(pos, &mut moves);

    if moves.is_empty() {
        if pos.in_check(pos.side_to_move) {
            return -MATE_VALUE + ply as i32;
        }
        return 0;
    }

    order_moves(pos, &mut moves);

    for mv in moves {
        let undo = pos.make_move(mv);
        let score = -search(pos, depth - 1, ply + 1, -beta, -alpha);
        pos.unmake_move(mv, undo);

        if score >= beta {
            return beta;
        }
        alpha = alpha.max(score);
    }

    alpha
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
