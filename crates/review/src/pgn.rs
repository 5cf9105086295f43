//! Minimal PGN movetext handling
//!
//! Only what a review needs: find the movetext of a single game and split
//! it into SAN tokens. Tag pairs are ignored, as are comments, variations
//! and numeric annotation glyphs.

use crate::error::{Result, ReviewError};

const RESULT_TOKENS: [&str; 4] = ["1-0", "0-1", "1/2-1/2", "*"];

/// Returns the movetext of `game`: the first line starting with `"1. "`
/// plus any continuation lines up to the next blank line or tag pair.
pub fn extract_movetext(game: &str) -> Result<String> {
    let mut lines = game.lines().map(str::trim);
    let first = lines
        .by_ref()
        .find(|line| line.starts_with("1. "))
        .ok_or(ReviewError::MissingMovetext)?;

    let mut movetext = first.to_string();
    for line in lines.take_while(|line| !line.is_empty() && !line.starts_with('[')) {
        movetext.push(' ');
        movetext.push_str(line);
    }
    Ok(movetext)
}

/// Splits movetext into SAN moves.
///
/// Move numbers (any token ending in `.`, including `12...`) are skipped and
/// the list ends at the first result token. `{...}` comments, `(...)`
/// variations and `$n` glyphs are dropped.
pub fn parse_movetext(movetext: &str) -> Vec<String> {
    let mut moves = Vec::new();
    let mut comment = false;
    let mut variation = 0usize;

    for token in space_delimiters(movetext).split_whitespace() {
        if token.starts_with('{') {
            comment = true;
        }
        if comment {
            comment = !token.ends_with('}');
            continue;
        }
        if token.starts_with('(') {
            variation += token.matches('(').count();
        }
        if variation > 0 {
            variation = variation.saturating_sub(token.matches(')').count());
            continue;
        }

        if RESULT_TOKENS.contains(&token) {
            break;
        }
        if token.ends_with('.') || token.starts_with('$') {
            continue;
        }
        moves.push(move_part(token).to_string());
    }

    moves
}

/// Pads braces and parentheses with spaces so they tokenize on their own.
fn space_delimiters(movetext: &str) -> String {
    let mut out = String::with_capacity(movetext.len());
    for ch in movetext.chars() {
        match ch {
            '{' | '(' => {
                out.push(' ');
                out.push(ch);
            }
            '}' | ')' => {
                out.push(ch);
                out.push(' ');
            }
            _ => out.push(ch),
        }
    }
    out
}

/// `"1.e4"` style tokens carry the move number glued to the move.
fn move_part(token: &str) -> &str {
    match token.rfind('.') {
        Some(i) if token[..i].chars().all(|c| c.is_ascii_digit() || c == '.') => &token[i + 1..],
        _ => token,
    }
}

#[cfg(test)]
#[path = "pgn_tests.rs"]
mod pgn_tests;
