//! Board state representation.
//!
//! A `Board` is a value: the walls and targets of a round never change and
//! are shared behind an `Arc`, while every robot displacement produces a new
//! `Board` with its own copy of the (four-entry) robot map.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use super::cell::{Cell, ALL_DIRECTIONS};
use super::piece::{Color, Robot, RobotId, Target, Wall};

/// Side length of the standard board.
pub const STANDARD_SIZE: u8 = 16;

/// Errors raised by board construction and queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("unknown robot id '{0}'")]
    InvalidRobotId(RobotId),

    #[error("malformed board: {0}")]
    MalformedBoard(String),

    #[error("no {0} robot on the board")]
    NoRobotOfColor(Color),
}

/// Walls and targets fixed for the lifetime of a round.
#[derive(Debug, PartialEq, Eq)]
struct Layout {
    walls: HashSet<Wall>,
    targets: HashMap<Cell, Target>,
}

/// The complete state of one round's board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    layout: Arc<Layout>,
    robots: BTreeMap<RobotId, Robot>,
}

impl Board {
    /// Builds a board, rejecting anything that does not fit on a
    /// `size x size` grid.
    ///
    /// Fails with `MalformedBoard` when the size is zero, any coordinate is
    /// out of range, two robots share an id, a colour or a cell, or two
    /// targets share a cell. Duplicate walls collapse into one.
    pub fn new(
        size: u8,
        robots: impl IntoIterator<Item = Robot>,
        targets: impl IntoIterator<Item = Target>,
        walls: impl IntoIterator<Item = Wall>,
    ) -> Result<Board, BoardError> {
        if size == 0 {
            return Err(BoardError::MalformedBoard("board size must be positive".into()));
        }
        let out_of_range = |what: &str, cell: Cell| {
            BoardError::MalformedBoard(format!(
                "{} at {} lies outside a {}x{} board",
                what, cell, size, size
            ))
        };

        let mut robot_map = BTreeMap::new();
        let mut occupied = HashSet::new();
        let mut colors = HashSet::new();
        for robot in robots {
            if !robot.position.in_bounds(size) {
                return Err(out_of_range("robot", robot.position));
            }
            if !occupied.insert(robot.position) {
                return Err(BoardError::MalformedBoard(format!(
                    "two robots occupy {}",
                    robot.position
                )));
            }
            if !colors.insert(robot.color) {
                return Err(BoardError::MalformedBoard(format!(
                    "more than one {} robot",
                    robot.color
                )));
            }
            if robot_map.contains_key(&robot.id) {
                return Err(BoardError::MalformedBoard(format!(
                    "duplicate robot id '{}'",
                    robot.id
                )));
            }
            robot_map.insert(robot.id.clone(), robot);
        }

        let mut target_map = HashMap::new();
        for target in targets {
            if !target.position.in_bounds(size) {
                return Err(out_of_range("target", target.position));
            }
            if target_map.insert(target.position, target).is_some() {
                return Err(BoardError::MalformedBoard(format!(
                    "two targets share {}",
                    target.position
                )));
            }
        }

        let mut wall_set = HashSet::new();
        for wall in walls {
            if !wall.position.in_bounds(size) {
                return Err(out_of_range("wall", wall.position));
            }
            wall_set.insert(wall);
        }

        Ok(Board {
            size,
            layout: Arc::new(Layout {
                walls: wall_set,
                targets: target_map,
            }),
            robots: robot_map,
        })
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    /// Looks up a robot by id.
    pub fn robot(&self, id: &RobotId) -> Option<&Robot> {
        self.robots.get(id)
    }

    /// Returns the robot occupying `cell`, if any.
    pub fn robot_at(&self, cell: Cell) -> Option<&Robot> {
        self.robots.values().find(|r| r.position == cell)
    }

    /// Returns the robot of `color`, if any.
    pub fn robot_of_color(&self, color: Color) -> Option<&Robot> {
        self.robots.values().find(|r| r.color == color)
    }

    /// Returns the target at `cell`, if any.
    pub fn target_at(&self, cell: Cell) -> Option<&Target> {
        self.layout.targets.get(&cell)
    }

    /// Returns the wall segments anchored on `cell`, in north, east, south,
    /// west order.
    pub fn walls_at(&self, cell: Cell) -> Vec<Wall> {
        ALL_DIRECTIONS
            .iter()
            .map(|&d| Wall::new(cell, d))
            .filter(|w| self.layout.walls.contains(w))
            .collect()
    }

    /// Returns whether exactly this wall segment was loaded.
    pub fn has_wall(&self, wall: Wall) -> bool {
        self.layout.walls.contains(&wall)
    }

    /// Iterates robots in id order.
    pub fn robots(&self) -> impl Iterator<Item = &Robot> {
        self.robots.values()
    }

    pub fn robot_count(&self) -> usize {
        self.robots.len()
    }

    pub fn target_count(&self) -> usize {
        self.layout.targets.len()
    }

    pub fn wall_count(&self) -> usize {
        self.layout.walls.len()
    }

    /// Returns a copy of this board with one robot relocated.
    ///
    /// Walls, targets, and the other robots are untouched. The new position
    /// is not checked against walls or other robots; callers resolve the
    /// move first.
    pub fn with_robot_moved(&self, id: &RobotId, position: Cell) -> Result<Board, BoardError> {
        let mut next = self.clone();
        let robot = next
            .robots
            .get_mut(id)
            .ok_or_else(|| BoardError::InvalidRobotId(id.clone()))?;
        robot.position = position;
        Ok(next)
    }
}
