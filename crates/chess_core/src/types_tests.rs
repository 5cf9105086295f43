use super::*;

#[test]
fn test_coord_round_trip() {
    assert_eq!(coord_to_sq("a1"), Some(0));
    assert_eq!(coord_to_sq("h8"), Some(63));
    assert_eq!(coord_to_sq("e4"), Some(28));
    assert_eq!(sq_to_coord(28), "e4");
    assert_eq!(coord_to_sq("i1"), None);
    assert_eq!(coord_to_sq("a9"), None);
    assert_eq!(coord_to_sq("e"), None);
}

#[test]
fn test_sq_bounds() {
    assert_eq!(sq(0, 0), Some(0));
    assert_eq!(sq(7, 7), Some(63));
    assert_eq!(sq(-1, 0), None);
    assert_eq!(sq(0, 8), None);
}

#[test]
fn test_piece_kind_index_order() {
    for (i, kind) in PieceKind::ALL.iter().enumerate() {
        assert_eq!(kind.idx(), i);
    }
    assert_eq!(PieceKind::from_letter('n'), Some(PieceKind::Knight));
    assert_eq!(PieceKind::from_letter('x'), None);
    assert_eq!(PieceKind::Queen.letter(), 'Q');
}
