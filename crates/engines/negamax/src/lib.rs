//! Negamax Chess Engine
//!
//! Fixed-depth alpha-beta search over a material-only evaluation, with a
//! capture-only quiescence search at the leaves and MVV-LVA move ordering.
//! Root moves are searched in parallel, one thread each.

pub mod eval;
pub mod ordering;
pub mod quiescence;
pub mod root;
pub mod search;

use chess_core::{Engine, Position, SearchResult};

pub use eval::{evaluate, material, piece_value, MATE_VALUE, PIECE_VALUES};
pub use ordering::{move_score, order_moves};
pub use quiescence::capture_search;
pub use root::{best_root_move, evaluate_root_moves, find_best_move, RootScore};
pub use search::search;

/// Engine wrapper around the threaded root search.
///
/// Stateless between searches; every call starts from scratch.
#[derive(Debug, Clone, Copy, Default)]
pub struct NegamaxEngine;

impl NegamaxEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for NegamaxEngine {
    fn search(&mut self, pos: &Position, depth: u8) -> SearchResult {
        let scores = evaluate_root_moves(pos, depth);

        match best_root_move(&scores) {
            Some(best) => SearchResult {
                best_move: Some(best.mv),
                score: best.score,
                depth,
            },
            // Mated or stalemated: report the terminal score
            None => SearchResult {
                best_move: None,
                score: search(&mut pos.clone(), 1, 0, -MATE_VALUE, MATE_VALUE),
                depth,
            },
        }
    }

    fn name(&self) -> &str {
        "Negamax v1.0"
    }
}
