//! Driver command parser.
//!
//! Parses incoming text commands into structured `Command` variants that the
//! driver main loop can dispatch on.

use crate::board::{Cell, RobotId};

/// A parsed driver command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Synchronization ping; driver must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Start a round on a JSON board snapshot.
    Board { json: String },

    /// Slide a robot toward a tapped cell: `move <robot_id> <x> <y>`.
    Move { robot: RobotId, destination: Cell },

    /// Advance the round clock by some seconds (default 1).
    Tick { seconds: u64 },

    /// Restore the loaded board and clear the move log.
    Reset,

    /// List robot positions.
    Robots,

    /// Print the recorded solution as JSON.
    Solution,

    /// Load a JSON move log for playback over the loaded board.
    Replay { json: String },

    /// Advance playback by one move.
    Step,

    /// Toggle playback pause.
    Pause,

    /// Cycle playback speed.
    Speed,

    /// Terminate the driver.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    match tokens[0] {
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),
        "reset" => Some(Command::Reset),
        "robots" => Some(Command::Robots),
        "solution" => Some(Command::Solution),
        "step" => Some(Command::Step),
        "pause" => Some(Command::Pause),
        "speed" => Some(Command::Speed),

        "setoption" => parse_setoption(&tokens),
        "board" => rest_of_line(trimmed, "board").map(|json| Command::Board { json }),
        "replay" => rest_of_line(trimmed, "replay").map(|json| Command::Replay { json }),
        "move" => parse_move(&tokens),
        "tick" => parse_tick(&tokens),

        other => {
            tracing::warn!(command = other, "unknown command");
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        tracing::warn!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = tokens.iter().position(|&t| t == "value");

    let (name, value) = match value_idx {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                tracing::warn!("malformed setoption: empty name");
                return None;
            }
            let value = if value_parts.is_empty() {
                None
            } else {
                Some(value_parts.join(" "))
            };
            (name_parts.join(" "), value)
        }
        None => (tokens[2..].join(" "), None),
    };

    Some(Command::SetOption { name, value })
}

/// Captures everything after `keyword`, which may contain spaces (JSON).
fn rest_of_line(line: &str, keyword: &str) -> Option<String> {
    let rest = line.strip_prefix(keyword).unwrap_or("").trim();
    if rest.is_empty() {
        tracing::warn!("malformed {}: expected '{} <json>'", keyword, keyword);
        return None;
    }
    Some(rest.to_string())
}

/// Parses `move <robot_id> <x> <y>`.
fn parse_move(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 4 {
        tracing::warn!("malformed move: expected 'move <robot_id> <x> <y>'");
        return None;
    }
    let x = tokens[2].parse::<u8>();
    let y = tokens[3].parse::<u8>();
    match (x, y) {
        (Ok(x), Ok(y)) => Some(Command::Move {
            robot: RobotId::new(tokens[1]),
            destination: Cell::new(x, y),
        }),
        _ => {
            tracing::warn!("invalid move coordinates: '{} {}'", tokens[2], tokens[3]);
            None
        }
    }
}

/// Parses `tick [seconds]`.
fn parse_tick(tokens: &[&str]) -> Option<Command> {
    match tokens.get(1) {
        None => Some(Command::Tick { seconds: 1 }),
        Some(s) => match s.parse::<u64>() {
            Ok(seconds) => Some(Command::Tick { seconds }),
            Err(_) => {
                tracing::warn!("invalid tick value: '{}'", s);
                None
            }
        },
    }
}
