//! Game review CLI
//!
//! Grade the moves of a recorded game, or query the search directly.

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chess_core::{move_to_san, move_to_uci, Engine, Position};
use negamax_engine::{evaluate, NegamaxEngine};
use review::{evaluate_position, review_pgn, ReviewConfig, Side, DEFAULT_DEPTH};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("chess-review game reviewer");
    println!();
    println!("Usage:");
    println!("  review game <pgn-file> [--depth D] [--config F] [--color white|black] [--out F]");
    println!("  review eval <fen> [--depth D]");
    println!("  review best <fen> [--depth D]");
    println!();
    println!("Options:");
    println!("  --depth, -d    Search depth in plies (default {DEFAULT_DEPTH})");
    println!("  --config, -c   TOML file with depth, player and thresholds");
    println!("  --color        Only classify this side's moves");
    println!("  --out, -o      Write the review as JSON");
    println!();
    println!("Logging goes to stderr; set RUST_LOG=debug for per-move detail.");
    println!();
    println!("Examples:");
    println!("  review game games/casual.pgn --color white");
    println!("  review best \"rnb1kbnr/ppp2ppp/3p1q2/4p3/2B1P3/2N2N2/PPPP1PPP/R1BQK2R b KQkq - 1 4\"");
}

/// Flags shared by all subcommands; the rest are positional.
#[derive(Debug, Default)]
struct Options {
    depth: Option<u8>,
    config: Option<PathBuf>,
    color: Option<Side>,
    out: Option<PathBuf>,
    positional: Vec<String>,
}

fn parse_options(args: &[String]) -> Result<Options> {
    let mut opts = Options::default();

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = || {
            args.get(i + 1)
                .with_context(|| format!("{flag} requires a value"))
        };
        match flag {
            "--depth" | "-d" => {
                let v = value()?;
                opts.depth = Some(v.parse().with_context(|| format!("invalid depth `{v}`"))?);
                i += 1;
            }
            "--config" | "-c" => {
                opts.config = Some(PathBuf::from(value()?));
                i += 1;
            }
            "--color" => {
                opts.color = Some(value()?.parse::<Side>().map_err(anyhow::Error::msg)?);
                i += 1;
            }
            "--out" | "-o" => {
                opts.out = Some(PathBuf::from(value()?));
                i += 1;
            }
            other if other.starts_with("--") => bail!("unknown option `{other}`"),
            other => opts.positional.push(other.to_string()),
        }
        i += 1;
    }

    Ok(opts)
}

fn run_game(args: &[String]) -> Result<()> {
    let opts = parse_options(args)?;
    let Some(pgn_path) = opts.positional.first() else {
        bail!("game requires a PGN file");
    };

    let mut config = match &opts.config {
        Some(path) => ReviewConfig::load(path)?,
        None => ReviewConfig::default(),
    };
    if let Some(depth) = opts.depth {
        config.depth = depth;
    }
    if opts.color.is_some() {
        config.player = opts.color;
    }

    let game = std::fs::read_to_string(pgn_path)
        .with_context(|| format!("failed to read PGN file {pgn_path}"))?;

    info!(file = %pgn_path, depth = config.depth, "reviewing game");
    let review = review_pgn(&game, &config)?;
    review.print_report();

    if let Some(out) = &opts.out {
        review.save(out)?;
        info!(path = %out.display(), "review saved");
    }
    Ok(())
}

fn position_from_args(opts: &Options) -> Result<Position> {
    if opts.positional.is_empty() {
        bail!("a FEN string is required");
    }
    let fen = opts.positional.join(" ");
    Position::from_fen(&fen).with_context(|| format!("invalid FEN `{fen}`"))
}

fn run_eval(args: &[String]) -> Result<()> {
    let opts = parse_options(args)?;
    let pos = position_from_args(&opts)?;
    let depth = opts.depth.unwrap_or(DEFAULT_DEPTH);

    println!("Material: {:+}", evaluate(&pos));
    println!("Search (depth {depth}): {:+}", evaluate_position(&pos, depth));
    Ok(())
}

fn run_best(args: &[String]) -> Result<()> {
    let opts = parse_options(args)?;
    let pos = position_from_args(&opts)?;
    let depth = opts.depth.unwrap_or(DEFAULT_DEPTH);

    let mut engine = NegamaxEngine::new();
    let result = engine.search(&pos, depth);
    match result.best_move {
        Some(mv) => println!(
            "Best move: {} ({}), score {:+}",
            move_to_san(&pos, mv),
            move_to_uci(mv),
            result.score
        ),
        None if pos.in_check(pos.side_to_move) => println!("No legal moves: checkmate"),
        None => println!("No legal moves: stalemate"),
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "game" => run_game(&args[2..]),
        "eval" => run_eval(&args[2..]),
        "best" => run_best(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command `{other}`")
        }
    }
}
