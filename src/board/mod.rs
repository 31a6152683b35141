//! Board representation.
//!
//! Contains the cell coordinates, pieces, resolved moves, and the immutable
//! `Board` value that the resolver and recorder operate on.

pub mod cell;
pub mod moves;
pub mod piece;
pub mod state;

pub use cell::{Cell, Direction, ALL_DIRECTIONS};
pub use moves::Move;
pub use piece::{Color, Robot, RobotId, Target, TargetColor, Wall, ALL_COLORS};
pub use state::{Board, BoardError, STANDARD_SIZE};
