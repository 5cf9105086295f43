//! Game review for chess-review
//!
//! This crate provides infrastructure for:
//! - Extracting SAN moves from a PGN game
//! - Scoring every position of the game with the negamax search
//! - Labelling each move by the material it gave away
//! - Saving reviews as JSON and printing text reports
//!
//! # Usage
//!
//! ```bash
//! # Review a game at the default depth
//! cargo run -p review -- game my_game.pgn
//!
//! # Only grade Black's moves, search deeper, keep the result
//! cargo run -p review -- game my_game.pgn --color black --depth 4 --out review.json
//! ```

mod analysis;
mod classify;
mod config;
mod error;
mod pgn;
mod report;

pub use analysis::*;
pub use classify::*;
pub use config::*;
pub use error::*;
pub use pgn::*;
pub use report::*;
