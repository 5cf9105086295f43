//! Standard Algebraic Notation, as found in PGN movetext.

use crate::{board::Position, error::MoveParseError, movegen::legal_moves, types::*};

/// Resolves a SAN token (`e4`, `Nbd7`, `exd5`, `e8=Q+`, `O-O-O`) to the
/// matching legal move of `pos`. Check marks and `!`/`?` annotations are ignored.
pub fn parse_san(pos: &Position, txt: &str) -> Result<Move, MoveParseError> {
    let malformed = || MoveParseError::Malformed(txt.to_string());
    let core = txt.trim_end_matches(['+', '#', '!', '?']);
    if core.is_empty() || !core.is_ascii() {
        return Err(malformed());
    }

    let legals = legal_moves(pos);

    if let Some(kingside) = match core {
        "O-O" | "0-0" => Some(true),
        "O-O-O" | "0-0-0" => Some(false),
        _ => None,
    } {
        return legals
            .into_iter()
            .find(|m| m.is_castle && (m.to > m.from) == kingside)
            .ok_or_else(|| MoveParseError::Illegal(txt.to_string()));
    }

    let (body, promo) = split_promotion(core).ok_or_else(malformed)?;
    if body.len() < 2 {
        return Err(malformed());
    }
    let to = coord_to_sq(&body[body.len() - 2..]).ok_or_else(malformed)?;
    let mut head = &body[..body.len() - 2];

    let piece = match head.chars().next() {
        Some(ch) if ch.is_ascii_uppercase() => {
            head = &head[1..];
            PieceKind::from_letter(ch).ok_or_else(malformed)?
        }
        _ => PieceKind::Pawn,
    };

    let mut from_file = None;
    let mut from_rank = None;
    for ch in head.chars() {
        match ch {
            'a'..='h' => from_file = Some(ch as i8 - 'a' as i8),
            '1'..='8' => from_rank = Some(ch as i8 - '1' as i8),
            'x' | ':' | '-' => {}
            _ => return Err(malformed()),
        }
    }

    let mut matches = legals.into_iter().filter(|m| {
        m.to == to
            && pos.kind_at(m.from) == Some(piece)
            && from_file.is_none_or(|f| file_of(m.from) == f)
            && from_rank.is_none_or(|r| rank_of(m.from) == r)
            && match promo {
                Some(_) => m.promo == promo,
                None => m.promo.is_none() || m.promo == Some(PieceKind::Queen),
            }
    });

    match (matches.next(), matches.next()) {
        (Some(mv), None) => Ok(mv),
        (None, _) => Err(MoveParseError::Illegal(txt.to_string())),
        (Some(_), Some(_)) => Err(MoveParseError::Ambiguous(txt.to_string())),
    }
}

// "e8=Q" and "e8Q" both name a queen promotion.
fn split_promotion(core: &str) -> Option<(&str, Option<PieceKind>)> {
    let last = core.chars().last()?;
    if !matches!(last, 'Q' | 'R' | 'B' | 'N') {
        return Some((core, None));
    }
    let kind = PieceKind::from_letter(last)?;
    let body = core[..core.len() - 1].trim_end_matches('=');
    Some((body, Some(kind)))
}

/// Renders a legal move of `pos` in SAN, including `+`/`#` suffixes.
pub fn move_to_san(pos: &Position, mv: Move) -> String {
    let Some(moved) = pos.piece_at(mv.from) else {
        return String::new();
    };

    let mut out = String::with_capacity(8);
    if mv.is_castle {
        out.push_str(if mv.to > mv.from { "O-O" } else { "O-O-O" });
    } else {
        let capture = mv.is_en_passant || pos.piece_at(mv.to).is_some();
        if moved.kind == PieceKind::Pawn {
            if capture {
                out.push((b'a' + file_of(mv.from) as u8) as char);
            }
        } else {
            out.push(moved.kind.letter());
            out.push_str(&disambiguation(pos, mv, moved.kind));
        }
        if capture {
            out.push('x');
        }
        out.push_str(&sq_to_coord(mv.to));
        if let Some(p) = mv.promo {
            out.push('=');
            out.push(p.letter());
        }
    }

    let mut after = pos.clone();
    after.make_move(mv);
    if after.in_check(after.side_to_move) {
        out.push(if legal_moves(&after).is_empty() { '#' } else { '+' });
    }
    out
}

fn disambiguation(pos: &Position, mv: Move, kind: PieceKind) -> String {
    let rivals: Vec<u8> = legal_moves(pos)
        .into_iter()
        .filter(|m| m.to == mv.to && m.from != mv.from && pos.kind_at(m.from) == Some(kind))
        .map(|m| m.from)
        .collect();
    if rivals.is_empty() {
        return String::new();
    }
    let coord = sq_to_coord(mv.from);
    if rivals.iter().all(|&s| file_of(s) != file_of(mv.from)) {
        coord[..1].to_string()
    } else if rivals.iter().all(|&s| rank_of(s) != rank_of(mv.from)) {
        coord[1..].to_string()
    } else {
        coord
    }
}

#[cfg(test)]
#[path = "san_tests.rs"]
mod san_tests;
