use super::*;

fn sample() -> GameReview {
    let mv = |ply: usize,
              san: &str,
              uci: &str,
              evaluation: i32,
              loss: i32,
              classification: Option<Classification>| EvaluatedMove {
        ply,
        san: san.to_string(),
        uci: uci.to_string(),
        mover: if ply % 2 == 1 { Side::White } else { Side::Black },
        evaluation,
        loss,
        classification,
    };
    GameReview {
        depth: 2,
        player: None,
        initial_evaluation: 0,
        final_fen: "rnbqkbnr/pppp1ppp/8/4P3/8/8/PPP1PPPP/RNBQKBNR b KQkq - 0 2".to_string(),
        moves: vec![
            mv(1, "d4", "d2d4", 0, 0, Some(Classification::Good)),
            mv(2, "e5", "e7e5", 1, 1, Some(Classification::Inaccuracy)),
            mv(3, "dxe5", "d4e5", -1, 0, Some(Classification::Good)),
            mv(4, "Qh4", "d8h4", 4, 3, Some(Classification::Blunder)),
        ],
    }
}

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("review-{}-{name}", std::process::id()))
}

#[test]
fn test_counts_by_side() {
    let review = sample();
    assert_eq!(review.count(Side::White, Classification::Good), 2);
    assert_eq!(review.count(Side::Black, Classification::Good), 0);
    assert_eq!(review.count(Side::Black, Classification::Inaccuracy), 1);
    assert_eq!(review.count(Side::Black, Classification::Blunder), 1);
}

#[test]
fn test_errors_lists_mistakes_and_blunders() {
    let review = sample();
    let errors: Vec<&str> = review.errors().map(|m| m.san.as_str()).collect();
    assert_eq!(errors, ["Qh4"]);
}

#[test]
fn test_save_load_json() {
    let review = sample();
    let path = temp_path("save-load.json");
    review.save(&path).unwrap();
    let loaded = GameReview::load(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, review);
}

#[test]
fn test_json_uses_lowercase_sides() {
    let json = serde_json::to_string(&sample()).unwrap();
    assert!(json.contains("\"mover\":\"white\""));
    assert!(json.contains("\"classification\":\"Blunder\""));
}

#[test]
fn test_load_errors() {
    let missing = GameReview::load(&temp_path("missing.json")).unwrap_err();
    assert!(matches!(missing, ReviewError::Io { .. }));

    let path = temp_path("garbage.json");
    std::fs::write(&path, "{ not json").unwrap();
    let garbage = GameReview::load(&path).unwrap_err();
    std::fs::remove_file(&path).ok();
    assert!(matches!(garbage, ReviewError::Json(_)));
}

#[test]
fn test_generate_report() {
    let report = sample().generate_report();
    assert!(report.contains("=== Game review (depth 2) ==="));
    assert!(report.contains("1.d4"));
    assert!(report.contains("2...Qh4"));
    assert!(report.contains("Blunder ??"));
    assert!(report.contains("white: 2 Good, 0 Inaccuracy, 0 Mistake, 0 Blunder"));
    assert!(report.contains("black: 0 Good, 1 Inaccuracy, 0 Mistake, 1 Blunder"));
    assert!(!report.contains("Classified side"));
}

#[test]
fn test_report_for_one_side() {
    let mut review = sample();
    review.player = Some(Side::Black);
    let report = review.generate_report();
    assert!(report.contains("Classified side: black"));
    assert!(!report.contains("white: "));
    assert!(report.contains("black: "));
}
