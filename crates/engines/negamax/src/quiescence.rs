//! Capture-only search past the nominal depth.
//!
//! A fixed-depth search that stops in the middle of an exchange misjudges
//! the position (the horizon effect). At depth zero the principal search
//! hands over to `capture_search`, which keeps playing captures until none
//! are left, letting the side to move "stand pat" on the static score
//! whenever capturing would not help.
//!
//! There is no depth cap. Every capture removes a piece, so a line ends
//! after at most 30 plies, but long forced capture chains do recurse that
//! deep on the thread's stack.

use chess_core::{legal_captures_into, Position};

use crate::eval::evaluate;
use crate::ordering::order_moves;

/// Fail-hard quiescence search.
///
/// Returns a score for the side to move within `[alpha, beta]`; exactly
/// `beta` on a cutoff. `pos` is mutated with make/unmake and is identical
/// to its input on return.
pub fn capture_search(pos: &mut Position, mut alpha: i32, beta: i32, ply: u32) -> i32 {
    let stand_pat = evaluate(pos);
    if stand_pat >= beta {
        return beta;
    }
    alpha = alpha.max(stand_pat);

    let mut captures = Vec::with_capacity(16);
    legal_captures_into(pos, &mut captures);
    order_moves(pos, &mut captures);

    for mv in captures {
        let undo = pos.make_move(mv);
        let score = -capture_search(pos, -beta, -alpha, ply + 1);
        pos.unmake_move(mv, undo);

        if score >= beta {
            return beta;
        }
        alpha = alpha.max(score);
    }

    alpha
}

#[cfg(test)]
#[path = "quiescence_tests.rs"]
mod quiescence_tests;
