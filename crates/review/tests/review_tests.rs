use std::path::{Path, PathBuf};

use review::{review_pgn, Classification, GameReview, ReviewConfig, Side};

fn data(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name)
}

fn load_fixture() -> (String, ReviewConfig) {
    let game = std::fs::read_to_string(data("knight_fork.pgn")).unwrap();
    let config = ReviewConfig::load(&data("review.toml")).unwrap();
    (game, config)
}

#[test]
fn reviews_first_game_of_pgn_file() {
    let (game, config) = load_fixture();
    assert_eq!(config.depth, 2);
    assert_eq!(config.player, Some(Side::Black));

    let review = review_pgn(&game, &config).unwrap();
    let sans: Vec<&str> = review.moves.iter().map(|m| m.san.as_str()).collect();
    assert_eq!(sans, ["e4", "Nf6", "e5", "Nd5", "c4", "Nb4", "d4", "Nc2+"]);

    // Only Black was graded
    assert!(review
        .moves
        .iter()
        .all(|m| m.classification.is_some() == (m.mover == Side::Black)));
    assert_eq!(review.count(Side::Black, Classification::Good), 3);
    assert_eq!(review.count(Side::Black, Classification::Blunder), 1);

    let errors: Vec<&str> = review.errors().map(|m| m.san.as_str()).collect();
    assert_eq!(errors, ["Nc2+"]);
}

#[test]
fn review_survives_json_round_trip() {
    let (game, config) = load_fixture();
    let review = review_pgn(&game, &config).unwrap();

    let path = std::env::temp_dir().join(format!("review-it-{}.json", std::process::id()));
    review.save(&path).unwrap();
    let loaded = GameReview::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, review);
    assert_eq!(loaded.generate_report(), review.generate_report());
}

#[test]
fn report_names_the_blunder() {
    let (game, config) = load_fixture();
    let report = review_pgn(&game, &config).unwrap().generate_report();
    assert!(report.contains("4...Nc2+"));
    assert!(report.contains("Blunder ??"));
    assert!(report.contains("black: 3 Good, 0 Inaccuracy, 0 Mistake, 1 Blunder"));
}
