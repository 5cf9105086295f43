pub mod board;
pub mod error;
pub mod movegen;
pub mod perft;
pub mod san;
pub mod types;
pub mod uci;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use movegen::*;
pub use perft::{perft, perft_divide};
pub use san::*;
pub use types::*;
pub use uci::*;

// =============================================================================
// Engine trait: implemented by the search engines, used by the front ends
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation of the best move from the side-to-move's perspective
    pub score: i32,
    /// Requested search depth
    pub depth: u8,
}

/// Trait that all chess engines must implement.
///
/// Front ends (UCI loop, game review) only talk to this trait, so the search
/// behind it can be swapped without touching them.
pub trait Engine: Send {
    /// Search the position to a fixed depth.
    ///
    /// # Arguments
    /// * `pos` - The current position to analyze
    /// * `depth` - Search depth in plies
    ///
    /// # Returns
    /// SearchResult containing best move and its score
    fn search(&mut self, pos: &Position, depth: u8) -> SearchResult;

    /// Returns the engine's name for UCI identification
    fn name(&self) -> &str;

    /// Returns the engine's author for UCI identification
    fn author(&self) -> &str {
        "chess-review"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}

    /// Optional: Set a UCI option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
