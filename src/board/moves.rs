//! Resolved robot displacements.

use super::cell::Cell;
use super::piece::Color;

/// A single resolved move: the robot of `robot_color` slid from `from` to
/// `to`. Only the resolver produces these, and `from != to` always holds for
/// moves it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub robot_color: Color,
    pub from: Cell,
    pub to: Cell,
}
