//! Cell coordinates and travel directions.
//!
//! Coordinates are 1-indexed. `x` grows eastward and `y` grows southward,
//! so the north-west corner of every board is `(1, 1)`.

use std::fmt;

/// A cell on the board, identified by its 1-indexed `(x, y)` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: u8,
    pub y: u8,
}

impl Cell {
    pub const fn new(x: u8, y: u8) -> Self {
        Cell { x, y }
    }

    /// Returns whether the cell lies inside `[1, size] x [1, size]`.
    pub fn in_bounds(self, size: u8) -> bool {
        (1..=size).contains(&self.x) && (1..=size).contains(&self.y)
    }

    /// Returns the neighbouring cell in `dir`, or `None` if that step leaves
    /// a board of side `size`.
    pub fn step(self, dir: Direction, size: u8) -> Option<Cell> {
        let next = match dir {
            Direction::North => Cell::new(self.x, self.y.checked_sub(1)?),
            Direction::South => Cell::new(self.x, self.y.checked_add(1)?),
            Direction::East => Cell::new(self.x.checked_add(1)?, self.y),
            Direction::West => Cell::new(self.x.checked_sub(1)?, self.y),
        };
        next.in_bounds(size).then_some(next)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// One of the four axis-aligned directions a robot can slide in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// All directions in clockwise order starting from north.
pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

impl Direction {
    /// Returns the direction pointing the other way.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Returns the lowercase wire name (`north`, `east`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        }
    }

    /// Parses a direction from its lowercase wire name.
    pub fn from_name(s: &str) -> Option<Direction> {
        match s {
            "north" => Some(Direction::North),
            "east" => Some(Direction::East),
            "south" => Some(Direction::South),
            "west" => Some(Direction::West),
            _ => None,
        }
    }

    /// Infers the slide direction implied by tapping `to` while a robot sits
    /// on `from`.
    ///
    /// A change in `x` wins over a change in `y`, so a diagonal tap collapses
    /// to a horizontal slide. Returns `None` when both cells are equal.
    pub fn toward(from: Cell, to: Cell) -> Option<Direction> {
        if to.x != from.x {
            Some(if to.x > from.x { Direction::East } else { Direction::West })
        } else if to.y != from.y {
            Some(if to.y > from.y { Direction::South } else { Direction::North })
        } else {
            None
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
