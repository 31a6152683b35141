//! Ricochet -- a sliding-robot board engine driven over stdin.
//!
//! This binary reads one command per line from stdin and writes responses
//! to stdout. Diagnostics go to stderr through `tracing`, filtered by
//! `RUST_LOG`.

use std::io::{self, BufRead};

use tracing_subscriber::EnvFilter;

use ricochet::engine::{Engine, EngineError};
use ricochet::protocol::parser::{parse_command, Command};

/// Runs the main command loop, reading commands from stdin and writing
/// responses to stdout.
fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        let result = match cmd {
            Command::IsReady => engine.handle_isready(&mut out),
            Command::SetOption { name, value } => {
                engine.set_option(name, value);
                Ok(())
            }
            Command::Board { json } => engine.handle_board(&json, &mut out),
            Command::Move { robot, destination } => {
                engine.handle_move(&robot, destination, &mut out)
            }
            Command::Tick { seconds } => engine.tick(seconds),
            Command::Reset => engine.reset(),
            Command::Robots => engine.handle_robots(&mut out),
            Command::Solution => engine.handle_solution(&mut out),
            Command::Replay { json } => engine.handle_replay(&json, &mut out),
            Command::Step => engine.handle_step(&mut out),
            Command::Pause => engine.handle_pause(&mut out),
            Command::Speed => engine.handle_speed(&mut out),
            Command::Quit => break,
        };

        match result {
            Ok(()) => {}
            Err(EngineError::Io(e)) => {
                tracing::error!(error = %e, "stdout closed");
                break;
            }
            Err(e) => tracing::warn!(error = %e, "command rejected"),
        }
    }
}
