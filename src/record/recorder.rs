//! Solution recording and win detection.
//!
//! The `Recorder` owns the active round: the board as loaded, the current
//! board, the ordered move log, and the round clock. It is the only place
//! where board state changes, and it changes only by swapping in a new
//! `Board` value.

use crate::board::{Board, BoardError, Cell, Move, RobotId};
use crate::protocol::wire::WireMove;
use crate::resolve::resolve_move;

use super::clock::RoundClock;

/// The effect of one `apply_move` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The robot could not move; nothing was recorded.
    NoOp,
    /// The robot moved and the move was appended to the log.
    Moved {
        board: Board,
        mv: Move,
        win_triggered: bool,
    },
}

/// Round lifecycle triggers from the game service. Each carries the fresh
/// board snapshot to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundSignal {
    Started(Board),
    Reset(Board),
    Snapshot(Board),
}

/// Records the moves of one round.
#[derive(Debug, Clone)]
pub struct Recorder {
    initial: Board,
    board: Board,
    moves: Vec<Move>,
    clock: RoundClock,
    solved: bool,
}

impl Recorder {
    /// Starts recording a round on `board` with an empty move log and a
    /// fresh clock.
    pub fn new(board: Board) -> Self {
        Recorder {
            initial: board.clone(),
            board,
            moves: Vec::new(),
            clock: RoundClock::new(),
            solved: false,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board as it was loaded.
    pub fn initial_board(&self) -> &Board {
        &self.initial
    }

    /// Returns the move log in play order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    pub fn clock(&self) -> &RoundClock {
        &self.clock
    }

    /// Returns whether the most recent move landed a robot on a matching
    /// target.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Advances the round clock.
    pub fn tick(&mut self, seconds: u64) {
        self.clock.tick(seconds);
    }

    /// Slides robot `id` toward `destination` and records the result.
    ///
    /// A slide that goes nowhere returns `MoveOutcome::NoOp` and changes
    /// nothing. Otherwise the board is replaced, the move appended, and the
    /// win condition checked for the moved robot only. A win stops the
    /// clock.
    pub fn apply_move(
        &mut self,
        id: &RobotId,
        destination: Cell,
    ) -> Result<MoveOutcome, BoardError> {
        let robot = self
            .board
            .robot(id)
            .ok_or_else(|| BoardError::InvalidRobotId(id.clone()))?;

        let resolved = resolve_move(&self.board, robot, destination);
        if !resolved.moved {
            return Ok(MoveOutcome::NoOp);
        }

        let mv = Move {
            robot_color: robot.color,
            from: robot.position,
            to: resolved.final_position,
        };
        let next = self.board.with_robot_moved(id, resolved.final_position)?;

        let win_triggered = next
            .target_at(mv.to)
            .is_some_and(|t| t.color.matches(mv.robot_color));

        self.board = next;
        self.moves.push(mv);
        self.solved = win_triggered;

        if win_triggered {
            self.clock.stop();
            tracing::info!(
                color = %mv.robot_color,
                moves = self.moves.len(),
                elapsed = %self.clock.display(),
                "target reached"
            );
        }

        Ok(MoveOutcome::Moved {
            board: self.board.clone(),
            mv,
            win_triggered,
        })
    }

    /// Restores the board as loaded and clears the move log. The clock keeps
    /// running.
    pub fn reset(&mut self) {
        self.board = self.initial.clone();
        self.moves.clear();
        self.solved = false;
        tracing::info!("round reset to loaded board");
    }

    /// Replaces the round's board wholesale and clears the move log.
    pub fn reload(&mut self, board: Board) {
        self.initial = board.clone();
        self.board = board;
        self.moves.clear();
        self.solved = false;
    }

    /// Applies a lifecycle signal from the game service. `Started` also
    /// restarts the clock.
    pub fn apply_signal(&mut self, signal: RoundSignal) {
        match signal {
            RoundSignal::Started(board) => {
                self.reload(board);
                self.clock = RoundClock::new();
                tracing::info!("round started");
            }
            RoundSignal::Reset(board) | RoundSignal::Snapshot(board) => {
                self.reload(board);
                tracing::info!("board snapshot reloaded");
            }
        }
    }

    /// Projects the move log into the submission wire format, in play order.
    pub fn serialize(&self) -> Vec<WireMove> {
        self.moves.iter().map(WireMove::from).collect()
    }
}
