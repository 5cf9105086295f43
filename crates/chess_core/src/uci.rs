use crate::{board::Position, error::MoveParseError, movegen::legal_moves, types::*};

pub fn move_to_uci(mv: Move) -> String {
    let mut s = String::with_capacity(5);
    s.push_str(&sq_to_coord(mv.from));
    s.push_str(&sq_to_coord(mv.to));
    if let Some(p) = mv.promo {
        s.push(p.letter().to_ascii_lowercase());
    }
    s
}

/// Parses long algebraic notation (`e2e4`, `e7e8q`) against the legal moves
/// of `pos`, so the castle/en-passant flags come from the generator.
pub fn parse_uci_move(pos: &Position, txt: &str) -> Result<Move, MoveParseError> {
    let malformed = || MoveParseError::Malformed(txt.to_string());
    if !(4..=5).contains(&txt.len()) || !txt.is_ascii() {
        return Err(malformed());
    }
    let from = coord_to_sq(&txt[0..2]).ok_or_else(malformed)?;
    let to = coord_to_sq(&txt[2..4]).ok_or_else(malformed)?;
    let promo = match txt.chars().nth(4) {
        None => None,
        Some(ch) => match PieceKind::from_letter(ch) {
            Some(k @ (PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight)) => {
                Some(k)
            }
            _ => return Err(malformed()),
        },
    };

    let mut candidates = legal_moves(pos)
        .into_iter()
        .filter(|m| m.from == from && m.to == to);
    match promo {
        Some(_) => candidates.find(|m| m.promo == promo),
        // A bare promotion push defaults to the queen.
        None => candidates.find(|m| m.promo.is_none() || m.promo == Some(PieceKind::Queen)),
    }
    .ok_or_else(|| MoveParseError::Illegal(txt.to_string()))
}

/// Applies the arguments of a UCI `position` command:
/// `startpos [moves ...]` or `fen <fields> [moves ...]`.
pub fn set_position_from_uci(pos: &mut Position, args: &[&str]) -> Result<(), MoveParseError> {
    let moves_at = args.iter().position(|&a| a == "moves");
    let setup = &args[..moves_at.unwrap_or(args.len())];

    let mut next = match setup.first() {
        None | Some(&"startpos") => Position::startpos(),
        Some(&"fen") => Position::from_fen(&setup[1..].join(" "))?,
        Some(other) => return Err(MoveParseError::Malformed(other.to_string())),
    };

    if let Some(i) = moves_at {
        for txt in &args[i + 1..] {
            let mv = parse_uci_move(&next, txt)?;
            next.make_move(mv);
        }
    }

    *pos = next;
    Ok(())
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
