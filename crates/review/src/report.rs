//! Review results storage and reporting

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::EvaluatedMove;
use crate::classify::Classification;
use crate::config::Side;
use crate::error::{Result, ReviewError};

/// Complete review of one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReview {
    /// Search depth used for every position
    pub depth: u8,
    /// Side whose moves were classified (`None` = both)
    pub player: Option<Side>,
    /// Score of the start position for White
    pub initial_evaluation: i32,
    /// Position reached after the last move
    pub final_fen: String,
    pub moves: Vec<EvaluatedMove>,
}

impl GameReview {
    /// Number of `side`'s moves that received `class`.
    pub fn count(&self, side: Side, class: Classification) -> usize {
        self.moves
            .iter()
            .filter(|m| m.mover == side && m.classification == Some(class))
            .count()
    }

    /// Moves graded as mistakes or blunders, in game order.
    pub fn errors(&self) -> impl Iterator<Item = &EvaluatedMove> {
        self.moves.iter().filter(|m| {
            matches!(
                m.classification,
                Some(Classification::Mistake | Classification::Blunder)
            )
        })
    }

    /// Save review to JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| ReviewError::io(path, e))
    }

    /// Load review from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ReviewError::io(path, e))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Game review (depth {}) ===\n\n", self.depth));
        if let Some(player) = self.player {
            report.push_str(&format!("Classified side: {player}\n"));
        }
        report.push_str(&format!("Start position: {:+}\n\n", self.initial_evaluation));

        report.push_str(&format!(
            "{:>4}  {:<10} {:>8} {:>6}  {:<12}\n",
            "Ply", "Move", "Eval", "Loss", "Verdict"
        ));
        report.push_str(&"-".repeat(46));
        report.push('\n');

        for m in &self.moves {
            let number = if m.mover == Side::White {
                format!("{}.", m.ply.div_ceil(2))
            } else {
                format!("{}...", m.ply.div_ceil(2))
            };
            let verdict = m
                .classification
                .map(|c| format!("{c} {}", c.symbol()))
                .unwrap_or_default();
            report.push_str(&format!(
                "{:>4}  {:<10} {:>+8} {:>6}  {:<12}\n",
                m.ply,
                format!("{number}{}", m.san),
                m.evaluation,
                m.loss,
                verdict.trim_end()
            ));
        }

        report.push('\n');
        for side in [Side::White, Side::Black] {
            if self.player.is_some_and(|p| p != side) {
                continue;
            }
            let counts: Vec<String> = Classification::ALL
                .iter()
                .map(|&c| format!("{} {c}", self.count(side, c)))
                .collect();
            report.push_str(&format!("{side}: {}\n", counts.join(", ")));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
