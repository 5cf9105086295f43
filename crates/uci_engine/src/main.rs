mod session;

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use negamax_engine::NegamaxEngine;
use tracing::info;
use tracing_subscriber::EnvFilter;

use session::Session;

fn main() -> Result<()> {
    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = Session::new(NegamaxEngine::new());

    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        if !session
            .handle(line.trim(), &mut stdout)
            .context("failed to write to stdout")?
        {
            break;
        }
    }

    info!("uci session closed");
    Ok(())
}
