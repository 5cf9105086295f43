//! Move quality labels

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Thresholds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Good,
    Inaccuracy,
    Mistake,
    Blunder,
}

impl Classification {
    pub const ALL: [Classification; 4] = [
        Classification::Good,
        Classification::Inaccuracy,
        Classification::Mistake,
        Classification::Blunder,
    ];

    /// PGN-style suffix (`?!`, `?`, `??`); empty for good moves.
    pub fn symbol(self) -> &'static str {
        match self {
            Classification::Good => "",
            Classification::Inaccuracy => "?!",
            Classification::Mistake => "?",
            Classification::Blunder => "??",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Classification::Good => "Good",
            Classification::Inaccuracy => "Inaccuracy",
            Classification::Mistake => "Mistake",
            Classification::Blunder => "Blunder",
        };
        f.write_str(name)
    }
}

/// Material the mover gave up with a move, in pawns.
///
/// `before` is the score of the position the mover faced, from the mover's
/// side. `after` is the score once the move is played, from the opponent's
/// side, so the mover's own view of it is `-after`.
pub fn material_loss(before: i32, after: i32) -> i32 {
    before + after
}

/// Maps a material loss onto a label. Gains and zero loss are `Good`.
pub fn classify(loss: i32, thresholds: &Thresholds) -> Classification {
    if loss >= thresholds.blunder {
        Classification::Blunder
    } else if loss >= thresholds.mistake {
        Classification::Mistake
    } else if loss >= thresholds.inaccuracy {
        Classification::Inaccuracy
    } else {
        Classification::Good
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod classify_tests;
