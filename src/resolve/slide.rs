//! Sliding-move resolution.
//!
//! A robot never stops where the player tapped. The tap only picks one of
//! four directions; the robot then slides until the board edge, a wall, or
//! another robot stops it.

use crate::board::{Board, Cell, Direction, Robot, Wall};

/// The result of resolving one slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedMove {
    pub final_position: Cell,
    pub moved: bool,
}

impl ResolvedMove {
    fn stayed(position: Cell) -> Self {
        ResolvedMove {
            final_position: position,
            moved: false,
        }
    }
}

/// Returns whether a wall blocks the edge between `from` and its neighbour
/// `to` in direction `dir`.
///
/// A wall may be recorded on either side of an edge: on `from` facing `dir`,
/// or on `to` facing back. Both block in both directions.
pub fn edge_blocked(board: &Board, from: Cell, to: Cell, dir: Direction) -> bool {
    board.has_wall(Wall::new(from, dir)) || board.has_wall(Wall::new(to, dir.opposite()))
}

/// Slides `robot` as far as it goes in `dir` and returns its resting cell.
pub fn slide(board: &Board, robot: &Robot, dir: Direction) -> Cell {
    let mut current = robot.position;
    loop {
        let next = match current.step(dir, board.size()) {
            Some(c) => c,
            None => break,
        };
        if edge_blocked(board, current, next, dir) {
            break;
        }
        if board.robot_at(next).is_some_and(|r| r.id != robot.id) {
            break;
        }
        current = next;
    }
    current
}

/// Resolves the move implied by tapping `destination` while `robot` is
/// selected.
///
/// Only the direction of `destination` matters (see
/// [`Direction::toward`]). A tap on the robot's own cell, or a slide
/// blocked on its first step, comes back with `moved == false`.
pub fn resolve_move(board: &Board, robot: &Robot, destination: Cell) -> ResolvedMove {
    let dir = match Direction::toward(robot.position, destination) {
        Some(d) => d,
        None => return ResolvedMove::stayed(robot.position),
    };

    let final_position = slide(board, robot, dir);
    if final_position == robot.position {
        return ResolvedMove::stayed(robot.position);
    }

    tracing::debug!(
        robot = %robot.id,
        color = %robot.color,
        from = %robot.position,
        to = %final_position,
        direction = %dir,
        "resolved slide"
    );
    ResolvedMove {
        final_position,
        moved: true,
    }
}
