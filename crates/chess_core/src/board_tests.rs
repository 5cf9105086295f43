use super::*;
use crate::movegen::legal_moves;

#[test]
fn test_startpos_matches_start_fen() {
    let parsed = Position::from_fen(START_FEN).unwrap();
    assert_eq!(parsed, Position::startpos());
    assert_eq!(Position::startpos().to_fen(), START_FEN);
}

#[test]
fn test_fen_round_trip() {
    let fens = [
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2",
    ];
    for fen in fens {
        assert_eq!(Position::from_fen(fen).unwrap().to_fen(), fen);
    }
}

#[test]
fn test_fen_errors() {
    assert_eq!(
        Position::from_fen("8/8/8/8 w"),
        Err(FenError::MissingFields(2))
    );
    assert_eq!(
        Position::from_fen("8/8/8/8/8/8/8 w - -"),
        Err(FenError::RankCount(7))
    );
    assert_eq!(
        Position::from_fen("8/8/8/8/8/8/8/7X w - -"),
        Err(FenError::Piece('X'))
    );
    assert!(matches!(
        Position::from_fen("8/8/8/8/8/8/8/9 w - -"),
        Err(FenError::FileCount { .. })
    ));
    assert!(matches!(
        Position::from_fen("8/8/8/8/8/8/8/8 x - -"),
        Err(FenError::SideToMove(_))
    ));
}

#[test]
fn test_kind_at() {
    let pos = Position::startpos();
    assert_eq!(pos.kind_at(0), Some(PieceKind::Rook));
    assert_eq!(pos.kind_at(60), Some(PieceKind::King));
    assert_eq!(pos.kind_at(28), None);
}

#[test]
fn test_square_attacked() {
    let pos = Position::startpos();
    // e3 covered by d2/f2 pawns, e6 by black pawns
    assert!(pos.is_square_attacked(20, Color::White));
    assert!(pos.is_square_attacked(44, Color::Black));
    assert!(!pos.is_square_attacked(28, Color::White));
    assert!(!pos.is_square_attacked(28, Color::Black));

    let pos = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
    assert!(pos.is_square_attacked(56, Color::White)); // a8 along the a-file
    assert!(!pos.is_square_attacked(60, Color::White));
}

#[test]
fn test_in_check() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/4R1K1 b - - 0 1").unwrap();
    assert!(pos.in_check(Color::Black));
    assert!(!pos.in_check(Color::White));
}

#[test]
fn test_make_unmake_restores_position() {
    let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    let original = Position::from_fen(fen).unwrap();
    for mv in legal_moves(&original) {
        let mut pos = original.clone();
        let undo = pos.make_move(mv);
        assert_ne!(pos, original);
        pos.unmake_move(mv, undo);
        assert_eq!(pos, original, "unmake failed for {:?}", mv);
    }
}

#[test]
fn test_en_passant_capture_removes_pawn() {
    let mut pos =
        Position::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3")
            .unwrap();
    let before = pos.clone();
    let mv = legal_moves(&pos)
        .into_iter()
        .find(|m| m.is_en_passant)
        .expect("exf6 should be legal");
    let undo = pos.make_move(mv);
    assert_eq!(pos.kind_at(37), None); // f5 emptied
    assert_eq!(pos.kind_at(45), Some(PieceKind::Pawn)); // f6
    pos.unmake_move(mv, undo);
    assert_eq!(pos, before);
}

#[test]
fn test_castling_moves_rook_and_clears_rights() {
    let mut pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let mv = legal_moves(&pos)
        .into_iter()
        .find(|m| m.is_castle && m.to == 6)
        .expect("O-O should be legal");
    pos.make_move(mv);
    assert_eq!(pos.kind_at(5), Some(PieceKind::Rook));
    assert_eq!(pos.kind_at(7), None);
    assert!(!pos.castling.wk && !pos.castling.wq);
    assert!(pos.castling.bk && pos.castling.bq);
}

#[test]
fn test_promotion_and_unmake() {
    let mut pos = Position::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let before = pos.clone();
    let mv = Move::with_promo(48, 56, PieceKind::Knight);
    let undo = pos.make_move(mv);
    assert_eq!(pos.kind_at(56), Some(PieceKind::Knight));
    pos.unmake_move(mv, undo);
    assert_eq!(pos, before);
}
