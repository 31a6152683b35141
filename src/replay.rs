//! Move-log playback.
//!
//! Replays an already-resolved move log over the board it was played on.
//! Playback does not re-resolve slides: each step takes the robot of the
//! move's colour standing on the move's origin and puts it on the move's
//! destination, which must be free.

use std::time::Duration;

use crate::board::{Board, BoardError, Move};

/// Playback speed multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplaySpeed {
    #[default]
    Normal,
    Double,
    Quadruple,
}

impl ReplaySpeed {
    pub const fn multiplier(self) -> u32 {
        match self {
            ReplaySpeed::Normal => 1,
            ReplaySpeed::Double => 2,
            ReplaySpeed::Quadruple => 4,
        }
    }

    pub fn from_multiplier(m: u32) -> Option<ReplaySpeed> {
        match m {
            1 => Some(ReplaySpeed::Normal),
            2 => Some(ReplaySpeed::Double),
            4 => Some(ReplaySpeed::Quadruple),
            _ => None,
        }
    }

    /// 1x -> 2x -> 4x -> 1x.
    pub const fn next(self) -> ReplaySpeed {
        match self {
            ReplaySpeed::Normal => ReplaySpeed::Double,
            ReplaySpeed::Double => ReplaySpeed::Quadruple,
            ReplaySpeed::Quadruple => ReplaySpeed::Normal,
        }
    }

    /// Time between two playback steps.
    pub fn interval(self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.multiplier()))
    }
}

/// Playback cursor over one move log.
#[derive(Debug, Clone)]
pub struct Replay {
    base: Board,
    board: Board,
    moves: Vec<Move>,
    applied: usize,
    speed: ReplaySpeed,
    paused: bool,
}

impl Replay {
    /// Prepares playback of `moves` over `base`.
    ///
    /// Fails with `NoRobotOfColor` if a move names a colour that has no
    /// robot on the board.
    pub fn new(base: Board, moves: Vec<Move>, speed: ReplaySpeed) -> Result<Replay, BoardError> {
        if let Some(mv) = moves
            .iter()
            .find(|mv| base.robot_of_color(mv.robot_color).is_none())
        {
            return Err(BoardError::NoRobotOfColor(mv.robot_color));
        }
        Ok(Replay {
            board: base.clone(),
            base,
            moves,
            applied: 0,
            speed,
            paused: false,
        })
    }

    /// The board after the moves played so far.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Number of moves played so far.
    pub fn position(&self) -> usize {
        self.applied
    }

    pub fn is_finished(&self) -> bool {
        self.applied >= self.moves.len()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn speed(&self) -> ReplaySpeed {
        self.speed
    }

    /// Time to wait before the next step at the current speed.
    pub fn interval(&self) -> Duration {
        self.speed.interval()
    }

    /// Plays the next move. Returns `None` when paused or finished.
    ///
    /// Fails with `MalformedBoard`, leaving the cursor in place, when no
    /// robot of the move's colour stands on its origin or another robot
    /// already occupies its destination.
    pub fn step(&mut self) -> Result<Option<Move>, BoardError> {
        if self.paused || self.is_finished() {
            return Ok(None);
        }
        let mv = self.moves[self.applied];
        let id = match self.board.robot_at(mv.from) {
            Some(r) if r.color == mv.robot_color => r.id.clone(),
            _ => {
                return Err(BoardError::MalformedBoard(format!(
                    "no {} robot on {} for replayed move {}",
                    mv.robot_color,
                    mv.from,
                    self.applied + 1
                )))
            }
        };
        if let Some(other) = self.board.robot_at(mv.to) {
            return Err(BoardError::MalformedBoard(format!(
                "replayed move {} lands on {} robot at {}",
                self.applied + 1,
                other.color,
                mv.to
            )));
        }
        self.board = self.board.with_robot_moved(&id, mv.to)?;
        self.applied += 1;
        Ok(Some(mv))
    }

    /// Pauses or resumes playback; returns the new paused state.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Moves to the next speed and returns it.
    pub fn cycle_speed(&mut self) -> ReplaySpeed {
        self.speed = self.speed.next();
        self.speed
    }

    /// Returns to the first move on the base board.
    pub fn rewind(&mut self) {
        self.board = self.base.clone();
        self.applied = 0;
        self.paused = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Color, Robot, RobotId, STANDARD_SIZE};

    fn base() -> Board {
        Board::new(
            STANDARD_SIZE,
            [
                Robot::new("r", Color::Red, Cell::new(2, 2)),
                Robot::new("b", Color::Blue, Cell::new(9, 9)),
            ],
            [],
            [],
        )
        .unwrap()
    }

    fn log() -> Vec<Move> {
        vec![
            Move {
                robot_color: Color::Red,
                from: Cell::new(2, 2),
                to: Cell::new(2, 16),
            },
            Move {
                robot_color: Color::Blue,
                from: Cell::new(9, 9),
                to: Cell::new(1, 9),
            },
        ]
    }

    #[test]
    fn steps_through_log_then_stops() {
        let mut replay = Replay::new(base(), log(), ReplaySpeed::Normal).unwrap();
        assert_eq!(replay.step().unwrap(), Some(log()[0]));
        assert_eq!(
            replay.board().robot(&RobotId::new("r")).unwrap().position,
            Cell::new(2, 16)
        );
        assert_eq!(replay.step().unwrap(), Some(log()[1]));
        assert!(replay.is_finished());
        assert_eq!(replay.step().unwrap(), None);
        assert_eq!(replay.position(), 2);
        assert_eq!(
            replay.board().robot(&RobotId::new("b")).unwrap().position,
            Cell::new(1, 9)
        );
    }

    #[test]
    fn paused_replay_does_not_advance() {
        let mut replay = Replay::new(base(), log(), ReplaySpeed::Normal).unwrap();
        assert!(replay.toggle_pause());
        assert_eq!(replay.step().unwrap(), None);
        assert_eq!(replay.position(), 0);
        assert!(!replay.toggle_pause());
        assert!(replay.step().unwrap().is_some());
    }

    #[test]
    fn rewind_restores_base() {
        let mut replay = Replay::new(base(), log(), ReplaySpeed::Normal).unwrap();
        replay.step().unwrap();
        replay.rewind();
        assert_eq!(replay.board(), &base());
        assert_eq!(replay.position(), 0);
    }

    #[test]
    fn speed_cycles_and_sets_interval() {
        let mut replay = Replay::new(base(), log(), ReplaySpeed::Normal).unwrap();
        assert_eq!(replay.interval(), Duration::from_millis(1000));
        assert_eq!(replay.cycle_speed(), ReplaySpeed::Double);
        assert_eq!(replay.interval(), Duration::from_millis(500));
        assert_eq!(replay.cycle_speed(), ReplaySpeed::Quadruple);
        assert_eq!(replay.interval(), Duration::from_millis(250));
        assert_eq!(replay.cycle_speed(), ReplaySpeed::Normal);
    }

    #[test]
    fn speed_from_multiplier() {
        assert_eq!(ReplaySpeed::from_multiplier(4), Some(ReplaySpeed::Quadruple));
        assert_eq!(ReplaySpeed::from_multiplier(3), None);
    }

    #[test]
    fn rejects_colors_missing_from_board() {
        let mut moves = log();
        moves.push(Move {
            robot_color: Color::Yellow,
            from: Cell::new(4, 4),
            to: Cell::new(4, 1),
        });
        let err = Replay::new(base(), moves, ReplaySpeed::Normal).unwrap_err();
        assert_eq!(err, BoardError::NoRobotOfColor(Color::Yellow));
    }

    #[test]
    fn step_requires_robot_on_origin() {
        let moves = vec![Move {
            robot_color: Color::Red,
            from: Cell::new(9, 9),
            to: Cell::new(9, 1),
        }];
        let mut replay = Replay::new(base(), moves, ReplaySpeed::Normal).unwrap();
        assert!(matches!(replay.step(), Err(BoardError::MalformedBoard(_))));
        assert_eq!(replay.position(), 0);
        assert_eq!(replay.board(), &base());
    }

    #[test]
    fn step_rejects_occupied_destination() {
        let moves = vec![Move {
            robot_color: Color::Red,
            from: Cell::new(2, 2),
            to: Cell::new(9, 9),
        }];
        let mut replay = Replay::new(base(), moves, ReplaySpeed::Normal).unwrap();
        assert!(matches!(replay.step(), Err(BoardError::MalformedBoard(_))));
        assert_eq!(replay.position(), 0);

        let cells: Vec<Cell> = replay.board().robots().map(|r| r.position).collect();
        assert_eq!(cells.len(), 2);
        assert_ne!(cells[0], cells[1]);
    }

    #[test]
    fn empty_log_is_finished() {
        let mut replay = Replay::new(base(), Vec::new(), ReplaySpeed::Double).unwrap();
        assert!(replay.is_finished());
        assert_eq!(replay.step().unwrap(), None);
    }
}
