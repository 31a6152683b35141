//! Robots, targets, and wall segments.
//!
//! Represents the pieces placed on a board: the four coloured robots, the
//! coloured targets they race to, and the wall segments anchored on cells.

use std::fmt;

use super::cell::{Cell, Direction};

/// The colour of a robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

pub const ALL_COLORS: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

impl Color {
    /// Returns the lowercase wire name.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
        }
    }

    /// Parses a colour from its lowercase wire name.
    pub fn from_name(s: &str) -> Option<Color> {
        match s {
            "red" => Some(Color::Red),
            "blue" => Some(Color::Blue),
            "green" => Some(Color::Green),
            "yellow" => Some(Color::Yellow),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The colour a target accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetColor {
    /// Satisfied only by the robot of this colour.
    Only(Color),
    /// Satisfied by any robot.
    Any,
}

impl TargetColor {
    /// Returns whether a robot of `color` satisfies this target.
    pub fn matches(self, color: Color) -> bool {
        match self {
            TargetColor::Only(c) => c == color,
            TargetColor::Any => true,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            TargetColor::Only(c) => c.name(),
            TargetColor::Any => "any",
        }
    }

    pub fn from_name(s: &str) -> Option<TargetColor> {
        match s {
            "any" => Some(TargetColor::Any),
            other => Color::from_name(other).map(TargetColor::Only),
        }
    }
}

/// Stable robot identity assigned by the game service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RobotId(pub String);

impl RobotId {
    pub fn new(id: impl Into<String>) -> Self {
        RobotId(id.into())
    }
}

impl fmt::Display for RobotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A movable robot and the cell it currently rests on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Robot {
    pub id: RobotId,
    pub color: Color,
    pub position: Cell,
}

impl Robot {
    pub fn new(id: impl Into<String>, color: Color, position: Cell) -> Self {
        Robot {
            id: RobotId::new(id),
            color,
            position,
        }
    }
}

/// A target cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target {
    pub position: Cell,
    pub color: TargetColor,
}

/// A wall blocking the `direction` edge of the cell it is anchored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Wall {
    pub position: Cell,
    pub direction: Direction,
}

impl Wall {
    pub const fn new(position: Cell, direction: Direction) -> Self {
        Wall { position, direction }
    }
}
