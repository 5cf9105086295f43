use rayon::prelude::*;

use chess_core::{move_to_uci, parse_san, Engine, Position};
use negamax_engine::{evaluate_root_moves, find_best_move, search, NegamaxEngine, MATE_VALUE};

const GAME_LINE: &[&str] = &["e4", "e5", "Nf3", "Qf6", "Bc4", "d6", "Nc3"];

fn replay(sans: &[&str]) -> Vec<Position> {
    let mut pos = Position::startpos();
    sans.iter()
        .map(|san| {
            let mv = parse_san(&pos, san).unwrap_or_else(|e| panic!("{san}: {e}"));
            pos.make_move(mv);
            pos.clone()
        })
        .collect()
}

#[test]
fn opening_line_scores_level_at_depth_three() {
    let positions = replay(GAME_LINE);
    assert_eq!(
        positions.last().unwrap().to_fen(),
        "rnb1kbnr/ppp2ppp/3p1q2/4p3/2B1P3/2N2N2/PPPP1PPP/R1BQK2R b KQkq - 1 4"
    );

    let scores: Vec<i32> = positions
        .par_iter()
        .map(|pos| search(&mut pos.clone(), 3, 0, -MATE_VALUE, MATE_VALUE))
        .collect();
    assert_eq!(scores, vec![0; GAME_LINE.len()]);
}

#[test]
fn opening_line_root_scores() {
    let pos = replay(GAME_LINE).pop().unwrap();
    let scores = evaluate_root_moves(&pos, 2);
    assert_eq!(scores.len(), 35);

    let score_of = |uci: &str| {
        scores
            .iter()
            .find(|s| move_to_uci(s.mv) == uci)
            .map(|s| s.score)
            .unwrap_or_else(|| panic!("{uci} not generated"))
    };
    // Queen sorties into the knight's or pawn's reach lose her
    assert_eq!(score_of("f6g5"), -9);
    assert_eq!(score_of("f6h4"), -9);
    assert_eq!(score_of("f6f5"), -8);
    assert_eq!(score_of("d6d5"), -1);
    assert_eq!(score_of("b8c6"), 0);

    let best = find_best_move(&pos, 2).unwrap();
    assert_eq!(score_of(&move_to_uci(best)), 0);
}

#[test]
fn engine_reports_best_score() {
    let mut engine = NegamaxEngine::new();
    let pos = Position::from_fen("6k1/5ppp/8/8/8/8/8/R3n1K1 w - - 0 1").unwrap();
    let result = engine.search(&pos, 2);
    assert_eq!(result.best_move.map(move_to_uci).as_deref(), Some("a1a8"));
    assert_eq!(result.score, MATE_VALUE);
    assert_eq!(result.depth, 2);
    assert_eq!(engine.name(), "Negamax v1.0");
}

#[test]
fn engine_reports_terminal_positions() {
    let mut engine = NegamaxEngine::new();
    let mated =
        Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
    let stalemated = Position::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();

    let result = engine.search(&mated, 3);
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, -MATE_VALUE);

    let result = engine.search(&stalemated, 3);
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, 0);
}

/// (fen, depth, expected best move)
const TACTICS: &[(&str, u8, &str)] = &[
    // back-rank mate over a free knight
    ("6k1/5ppp/8/8/8/8/8/R3n1K1 w - - 0 1", 1, "a1a8"),
    // only move out of check
    ("7k/8/8/8/8/8/6q1/R6K w - - 0 1", 2, "h1g2"),
    // scholar's mate
    (
        "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4",
        1,
        "h5f7",
    ),
];

#[test]
fn finds_tactical_moves() {
    TACTICS.par_iter().for_each(|&(fen, depth, expected)| {
        let pos = Position::from_fen(fen).unwrap();
        let mv = find_best_move(&pos, depth).unwrap();
        assert_eq!(move_to_uci(mv), expected, "{fen}");
    });
}
