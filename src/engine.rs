//! Driver state management.
//!
//! Holds the active round's `Recorder`, the engine options, and an optional
//! replay, and turns driver commands into protocol responses.

use std::collections::HashMap;
use std::io::{self, Write};

use crate::board::{BoardError, Cell, RobotId, STANDARD_SIZE};
use crate::protocol::wire::{encode_moves, parse_board, parse_moves, WireError};
use crate::record::{MoveOutcome, Recorder, RoundSignal};
use crate::replay::{Replay, ReplaySpeed};

/// Errors surfaced by driver commands.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("no board loaded")]
    NoBoard,

    #[error("no replay loaded")]
    NoReplay,

    #[error(transparent)]
    Wire(#[from] WireError),

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("output failed: {0}")]
    Io(#[from] io::Error),
}

/// Holds the mutable state of the driver between commands.
pub struct Engine {
    pub recorder: Option<Recorder>,
    pub replay: Option<Replay>,
    pub options: HashMap<String, String>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine with no round loaded.
    pub fn new() -> Self {
        Engine {
            recorder: None,
            replay: None,
            options: HashMap::new(),
        }
    }

    /// Sets an engine option.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        self.options.insert(name, value.unwrap_or_default());
    }

    /// Board size used for snapshots that omit one (default 16).
    pub fn board_size(&self) -> u8 {
        self.options
            .get("BoardSize")
            .and_then(|v| v.parse::<u8>().ok())
            .filter(|&s| s > 0)
            .unwrap_or(STANDARD_SIZE)
    }

    /// Initial replay speed (default 1x).
    pub fn replay_speed(&self) -> ReplaySpeed {
        self.options
            .get("ReplaySpeed")
            .and_then(|v| v.parse::<u32>().ok())
            .and_then(ReplaySpeed::from_multiplier)
            .unwrap_or_default()
    }

    fn recorder_mut(&mut self) -> Result<&mut Recorder, EngineError> {
        self.recorder.as_mut().ok_or(EngineError::NoBoard)
    }

    fn replay_mut(&mut self) -> Result<&mut Replay, EngineError> {
        self.replay.as_mut().ok_or(EngineError::NoReplay)
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> Result<(), EngineError> {
        writeln!(out, "readyok")?;
        out.flush()?;
        Ok(())
    }

    /// Starts a round on a JSON board snapshot. Any running replay is
    /// dropped. A rejected snapshot leaves the previous round in place.
    pub fn handle_board<W: Write>(&mut self, json: &str, out: &mut W) -> Result<(), EngineError> {
        let board = parse_board(json, self.board_size())?;
        tracing::info!(
            size = board.size(),
            robots = board.robot_count(),
            targets = board.target_count(),
            walls = board.wall_count(),
            "board loaded"
        );
        writeln!(
            out,
            "boardok {} {} {}",
            board.robot_count(),
            board.target_count(),
            board.wall_count()
        )?;
        match self.recorder.as_mut() {
            Some(rec) => rec.apply_signal(RoundSignal::Started(board)),
            None => self.recorder = Some(Recorder::new(board)),
        }
        self.replay = None;
        out.flush()?;
        Ok(())
    }

    /// Slides a robot toward a tapped cell.
    pub fn handle_move<W: Write>(
        &mut self,
        robot: &RobotId,
        destination: Cell,
        out: &mut W,
    ) -> Result<(), EngineError> {
        let rec = self.recorder_mut()?;
        match rec.apply_move(robot, destination)? {
            MoveOutcome::NoOp => writeln!(out, "noop")?,
            MoveOutcome::Moved {
                mv, win_triggered, ..
            } => {
                writeln!(
                    out,
                    "moved {} {} {} {} {}",
                    mv.robot_color, mv.from.x, mv.from.y, mv.to.x, mv.to.y
                )?;
                if win_triggered {
                    writeln!(out, "win {} {}", rec.move_count(), rec.clock().display())?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Advances the round clock.
    pub fn tick(&mut self, seconds: u64) -> Result<(), EngineError> {
        self.recorder_mut()?.tick(seconds);
        Ok(())
    }

    /// Restores the loaded board and clears the move log.
    pub fn reset(&mut self) -> Result<(), EngineError> {
        self.recorder_mut()?.reset();
        Ok(())
    }

    /// Lists robot positions in id order.
    pub fn handle_robots<W: Write>(&self, out: &mut W) -> Result<(), EngineError> {
        let rec = self.recorder.as_ref().ok_or(EngineError::NoBoard)?;
        for robot in rec.board().robots() {
            writeln!(
                out,
                "robot {} {} {} {}",
                robot.id, robot.color, robot.position.x, robot.position.y
            )?;
        }
        out.flush()?;
        Ok(())
    }

    /// Writes the recorded solution as a JSON array.
    pub fn handle_solution<W: Write>(&self, out: &mut W) -> Result<(), EngineError> {
        let rec = self.recorder.as_ref().ok_or(EngineError::NoBoard)?;
        let json = encode_moves(&rec.serialize())?;
        writeln!(out, "solution {}", json)?;
        out.flush()?;
        Ok(())
    }

    /// Loads a JSON move log for playback over the round's loaded board.
    pub fn handle_replay<W: Write>(&mut self, json: &str, out: &mut W) -> Result<(), EngineError> {
        let rec = self.recorder.as_ref().ok_or(EngineError::NoBoard)?;
        let base = rec.initial_board().clone();
        let moves = parse_moves(json, base.size())?;
        let replay = Replay::new(base, moves, self.replay_speed())?;
        writeln!(out, "replayok {}", replay.moves().len())?;
        self.replay = Some(replay);
        out.flush()?;
        Ok(())
    }

    /// Advances playback by one move.
    pub fn handle_step<W: Write>(&mut self, out: &mut W) -> Result<(), EngineError> {
        let replay = self.replay_mut()?;
        if replay.is_paused() {
            writeln!(out, "replaypaused")?;
        } else {
            match replay.step()? {
                Some(mv) => writeln!(
                    out,
                    "replay {} {} {} {}",
                    replay.position(),
                    mv.robot_color,
                    mv.to.x,
                    mv.to.y
                )?,
                None => writeln!(out, "replayend")?,
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Toggles playback pause.
    pub fn handle_pause<W: Write>(&mut self, out: &mut W) -> Result<(), EngineError> {
        let paused = self.replay_mut()?.toggle_pause();
        writeln!(out, "{}", if paused { "paused" } else { "resumed" })?;
        out.flush()?;
        Ok(())
    }

    /// Cycles playback speed and reports the new step interval.
    pub fn handle_speed<W: Write>(&mut self, out: &mut W) -> Result<(), EngineError> {
        let replay = self.replay_mut()?;
        let speed = replay.cycle_speed();
        writeln!(
            out,
            "speed {} {}",
            speed.multiplier(),
            replay.interval().as_millis()
        )?;
        out.flush()?;
        Ok(())
    }
}
