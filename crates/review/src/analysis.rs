//! Replays a game and scores every position with the principal search

use chess_core::{move_to_san, move_to_uci, parse_san, Position};
use negamax_engine::{search, MATE_VALUE};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::classify::{classify, material_loss, Classification};
use crate::config::{ReviewConfig, Side};
use crate::error::{Result, ReviewError};
use crate::pgn::{extract_movetext, parse_movetext};
use crate::report::GameReview;

/// One played move and how the search judged it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatedMove {
    /// 1-based half-move number
    pub ply: usize,
    /// Move as written by the oracle (check suffixes included)
    pub san: String,
    pub uci: String,
    pub mover: Side,
    /// Score of the resulting position for the side now to move
    pub evaluation: i32,
    /// Material the mover gave up, see [`material_loss`]
    pub loss: i32,
    /// `None` when the config restricts classification to the other side
    pub classification: Option<Classification>,
}

/// Full-window principal search of `pos`, from the side to move's view.
pub fn evaluate_position(pos: &Position, depth: u8) -> i32 {
    search(&mut pos.clone(), depth, 0, -MATE_VALUE, MATE_VALUE)
}

/// Plays `moves` (SAN) from the start position and evaluates each result.
///
/// The start position is searched as well so the first move has a
/// reference score.
pub fn review_game<S: AsRef<str>>(moves: &[S], config: &ReviewConfig) -> Result<GameReview> {
    let mut pos = Position::startpos();
    let initial_evaluation = evaluate_position(&pos, config.depth);
    let mut before = initial_evaluation;
    let mut evaluated = Vec::with_capacity(moves.len());

    for (i, text) in moves.iter().enumerate() {
        let text = text.as_ref();
        let ply = i + 1;
        let mv = parse_san(&pos, text).map_err(|source| ReviewError::IllegalMove {
            ply,
            san: text.to_string(),
            source,
        })?;

        let mover = Side::from(pos.side_to_move);
        let san = move_to_san(&pos, mv);
        pos.make_move(mv);

        let evaluation = evaluate_position(&pos, config.depth);
        let loss = material_loss(before, evaluation);
        let classification = config
            .classifies(mover)
            .then(|| classify(loss, &config.thresholds));

        debug!(ply, %san, evaluation, loss, ?classification, "move evaluated");

        evaluated.push(EvaluatedMove {
            ply,
            san,
            uci: move_to_uci(mv),
            mover,
            evaluation,
            loss,
            classification,
        });
        before = evaluation;
    }

    info!(plies = evaluated.len(), depth = config.depth, "game reviewed");

    Ok(GameReview {
        depth: config.depth,
        player: config.player,
        initial_evaluation,
        final_fen: pos.to_fen(),
        moves: evaluated,
    })
}

/// Extracts the movetext from a PGN game and reviews it.
pub fn review_pgn(game: &str, config: &ReviewConfig) -> Result<GameReview> {
    let movetext = extract_movetext(game)?;
    let moves = parse_movetext(&movetext);
    review_game(&moves, config)
}

#[cfg(test)]
#[path = "analysis_tests.rs"]
mod analysis_tests;
