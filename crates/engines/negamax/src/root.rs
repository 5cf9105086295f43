//! Root move dispatch
//!
//! Every legal root move is searched on its own OS thread against a private
//! copy of the position. Workers share nothing; each one writes a single slot
//! of the score table, and the scope joins them all before a move is picked.
//! Root moves go through the move orderer first, which fixes both the launch
//! order and which of several equally scored moves is chosen.

use std::thread;

use chess_core::{legal_moves, move_to_uci, Move, Position};
use tracing::debug;

use crate::eval::MATE_VALUE;
use crate::ordering::order_moves;
use crate::search::search;

/// A root move with the score its worker reported, from the root side's view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootScore {
    pub mv: Move,
    pub score: i32,
}

/// Scores every legal move of `pos`, one thread per move.
///
/// Each move is made on a scratch copy of `pos`, cloned for its worker and
/// taken back before the next one. The worker runs
/// `-search(child, depth, 0, -MATE_VALUE, MATE_VALUE)`. The child is searched
/// to the full `depth`, so the tree below the root is one ply deeper than
/// `depth` alone suggests.
///
/// The result follows move ordering (best MVV-LVA score first). An empty
/// vector means the side to move is checkmated or stalemated.
pub fn evaluate_root_moves(pos: &Position, depth: u8) -> Vec<RootScore> {
    let mut moves = legal_moves(pos);
    order_moves(pos, &mut moves);
    let mut scores = vec![0; moves.len()];
    let mut root = pos.clone();

    thread::scope(|s| {
        for (&mv, slot) in moves.iter().zip(scores.iter_mut()) {
            let undo = root.make_move(mv);
            let mut child = root.clone();
            root.unmake_move(mv, undo);

            s.spawn(move || {
                *slot = -search(&mut child, depth, 0, -MATE_VALUE, MATE_VALUE);
            });
        }
    });

    moves
        .into_iter()
        .zip(scores)
        .map(|(mv, score)| {
            debug!(mv = %move_to_uci(mv), score, "root move scored");
            RootScore { mv, score }
        })
        .collect()
}

/// Picks the strictly highest score, starting from `-MATE_VALUE`.
///
/// The earliest entry wins ties. When no score beats the sentinel (every
/// move loses to mate at ply 0) the first entry is still returned, so a
/// non-empty slice always yields a move.
pub fn best_root_move(scores: &[RootScore]) -> Option<RootScore> {
    let first = *scores.first()?;
    let mut best = first;
    let mut best_score = -MATE_VALUE;

    for &entry in scores {
        if entry.score > best_score {
            best_score = entry.score;
            best = entry;
        }
    }

    Some(best)
}

/// Searches every root move in parallel and returns the best one.
///
/// Returns `None` when `pos` has no legal moves.
pub fn find_best_move(pos: &Position, depth: u8) -> Option<Move> {
    let scores = evaluate_root_moves(pos, depth);
    let best = best_root_move(&scores)?;
    debug!(
        mv = %move_to_uci(best.mv),
        score = best.score,
        candidates = scores.len(),
        depth,
        "best move selected"
    );
    Some(best.mv)
}

#[cfg(test)]
#[path = "root_tests.rs"]
mod root_tests;
