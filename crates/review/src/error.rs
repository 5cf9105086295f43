//! Error type for the review pipeline

use std::path::PathBuf;

use chess_core::MoveParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid review config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid review file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("move {ply} `{san}` could not be played: {source}")]
    IllegalMove {
        ply: usize,
        san: String,
        #[source]
        source: MoveParseError,
    },

    #[error("no movetext found (expected a line starting with \"1. \")")]
    MissingMovetext,
}

impl ReviewError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReviewError>;
