//! UCI command handling, independent of stdin/stdout

use std::io::{self, Write};

use chess_core::{move_to_uci, set_position_from_uci, Engine, Position};
use tracing::{debug, warn};

pub const DEFAULT_DEPTH: u8 = 3;
pub const MAX_DEPTH: u8 = 8;

/// State carried between UCI commands.
pub struct Session<E: Engine> {
    engine: E,
    pos: Position,
    depth: u8,
}

impl<E: Engine> Session<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            pos: Position::startpos(),
            depth: DEFAULT_DEPTH,
        }
    }

    pub fn position(&self) -> &Position {
        &self.pos
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Handles one input line. Returns `Ok(false)` on `quit`.
    pub fn handle(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = parts.first() else {
            return Ok(true);
        };

        match command {
            "uci" => {
                writeln!(out, "id name {}", self.engine.name())?;
                writeln!(out, "id author {}", self.engine.author())?;
                writeln!(
                    out,
                    "option name Depth type spin default {DEFAULT_DEPTH} min 1 max {MAX_DEPTH}"
                )?;
                writeln!(out, "uciok")?;
            }
            "isready" => writeln!(out, "readyok")?,
            "setoption" => self.set_option(&parts[1..]),
            "ucinewgame" => {
                self.pos = Position::startpos();
                self.engine.new_game();
            }
            "position" => {
                // On error the previous position stays in place
                if let Err(e) = set_position_from_uci(&mut self.pos, &parts[1..]) {
                    warn!(error = %e, "rejected position command");
                }
            }
            "go" => self.go(&parts[1..], out)?,
            "quit" => return Ok(false),
            other => debug!(command = other, "ignoring unknown command"),
        }

        out.flush()?;
        Ok(true)
    }

    /// `setoption name <id> [value <x>]`
    fn set_option(&mut self, args: &[&str]) {
        let name_at = args.iter().position(|&a| a == "name");
        let value_at = args.iter().position(|&a| a == "value");
        let (Some(n), Some(v)) = (name_at, value_at) else {
            warn!(?args, "malformed setoption");
            return;
        };
        if n + 1 >= v {
            warn!(?args, "malformed setoption");
            return;
        }
        let name = args[n + 1..v].join(" ");
        let value = args[v + 1..].join(" ");

        if name.eq_ignore_ascii_case("Depth") {
            match value.parse::<u8>() {
                Ok(d) => self.depth = d.clamp(1, MAX_DEPTH),
                Err(_) => warn!(%value, "invalid Depth value"),
            }
        } else if !self.engine.set_option(&name, &value) {
            debug!(%name, "unknown option");
        }
    }

    /// Fixed-depth search; time controls are accepted and ignored.
    fn go(&mut self, args: &[&str], out: &mut impl Write) -> io::Result<()> {
        let depth = args
            .iter()
            .position(|&a| a == "depth")
            .and_then(|i| args.get(i + 1))
            .and_then(|d| d.parse::<u8>().ok())
            .map_or(self.depth, |d| d.clamp(1, MAX_DEPTH));

        let result = self.engine.search(&self.pos, depth);
        writeln!(out, "info depth {} score cp {}", result.depth, result.score * 100)?;
        match result.best_move {
            Some(mv) => writeln!(out, "bestmove {}", move_to_uci(mv)),
            None => writeln!(out, "bestmove 0000"),
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
