//! Material-only position evaluation

use chess_core::{Color, PieceKind, Position};

/// Magnitude of a checkmate score and of the root search window.
///
/// Kept far below `i32::MAX` so negation and the per-ply mate adjustment
/// can never overflow.
pub const MATE_VALUE: i32 = 100_000;

/// Piece values in pawn units, indexed by PieceKind::idx().
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
///
/// The king never counts toward material; its entry is only read by move
/// ordering, where it makes king captures and king moves into attack sort last.
pub const PIECE_VALUES: [i32; 6] = [1, 3, 3, 5, 9, MATE_VALUE];

#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.idx()]
}

/// Sum of non-king piece values for one side.
pub fn material(pos: &Position, color: Color) -> i32 {
    pos.board
        .iter()
        .flatten()
        .filter(|pc| pc.color == color && pc.kind != PieceKind::King)
        .map(|pc| piece_value(pc.kind))
        .sum()
}

/// Evaluates the position from the side-to-move's perspective.
///
/// Returns a score in pawn units:
/// - Positive = good for side to move
/// - Negative = bad for side to move
/// - 0 = equal material
///
/// Terminal positions are not special-cased; the search detects mate and
/// stalemate itself.
pub fn evaluate(pos: &Position) -> i32 {
    let us = pos.side_to_move;
    material(pos, us) - material(pos, us.other())
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
