//! Review configuration, loaded from TOML
//!
//! ```toml
//! depth = 3
//! player = "white"
//!
//! [thresholds]
//! inaccuracy = 1
//! mistake = 2
//! blunder = 3
//! ```
//!
//! Every field is optional; missing ones take the defaults above (with no
//! `player`, both sides are classified).

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use chess_core::Color;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ReviewError};

/// Default search depth per reviewed position.
pub const DEFAULT_DEPTH: u8 = 3;

/// Which side a move belongs to, in config and report form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl From<Color> for Side {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Side::White,
            Color::Black => Side::Black,
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "white" | "w" => Ok(Side::White),
            "black" | "b" => Ok(Side::Black),
            other => Err(format!("unknown side `{other}` (expected white or black)")),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => f.write_str("white"),
            Side::Black => f.write_str("black"),
        }
    }
}

/// Material loss, in pawns, at which a move earns each label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub inaccuracy: i32,
    pub mistake: i32,
    pub blunder: i32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            inaccuracy: 1,
            mistake: 2,
            blunder: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Depth handed to the principal search for every position
    pub depth: u8,
    /// Only this side's moves are classified; `None` classifies both
    pub player: Option<Side>,
    pub thresholds: Thresholds,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            player: None,
            thresholds: Thresholds::default(),
        }
    }
}

impl ReviewConfig {
    /// Reads a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ReviewError::io(path, e))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// True when moves by `side` should receive a classification.
    pub fn classifies(&self, side: Side) -> bool {
        self.player.is_none_or(|p| p == side)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
