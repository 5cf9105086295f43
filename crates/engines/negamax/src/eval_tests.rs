use super::*;

#[test]
fn test_startpos_is_balanced() {
    let pos = Position::startpos();
    assert_eq!(material(&pos, Color::White), 39);
    assert_eq!(material(&pos, Color::Black), 39);
    assert_eq!(evaluate(&pos), 0);
}

#[test]
fn test_score_is_relative_to_side_to_move() {
    // White is a rook up
    let white = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
    let black = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 b - - 0 1").unwrap();
    assert_eq!(evaluate(&white), 5);
    assert_eq!(evaluate(&black), -5);
}

#[test]
fn test_flipping_side_to_move_negates_score() {
    let pos = Position::from_fen("r3k3/pp6/8/8/8/8/PPP5/1N2K3 w - - 0 1").unwrap();
    let mut flipped = pos.clone();
    flipped.side_to_move = Color::Black;
    assert_eq!(evaluate(&pos), 3 + 3 - (5 + 2));
    assert_eq!(evaluate(&pos), -evaluate(&flipped));
}

#[test]
fn test_colour_mirror_keeps_score() {
    // Same material picture with colours and side to move swapped
    let pos = Position::from_fen("r3k3/pp6/8/8/8/8/PPP5/1N2K3 w - - 0 1").unwrap();
    let mirrored = Position::from_fen("1n2k3/ppp5/8/8/8/8/PP6/R3K3 b - - 0 1").unwrap();
    assert_eq!(evaluate(&pos), evaluate(&mirrored));
}

#[test]
fn test_king_is_excluded_from_material() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    assert_eq!(material(&pos, Color::White), 0);
    assert_eq!(evaluate(&pos), 0);
    assert_eq!(piece_value(PieceKind::King), MATE_VALUE);
}

#[test]
fn test_evaluate_terminal_position() {
    // Fool's mate: White is checkmated but material is level
    let pos =
        Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .unwrap();
    assert_eq!(evaluate(&pos), 0);
}
