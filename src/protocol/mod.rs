//! Wire formats and the driver command protocol.
//!
//! This module implements the JSON shapes exchanged with the game service
//! (board snapshots, solutions, stored move logs) and the line-oriented
//! command parser for the driver binary.

pub mod parser;
pub mod wire;

pub use parser::{parse_command, Command};
pub use wire::{
    encode_moves, group_player_moves, parse_board, parse_moves, BoardSnapshot, MoveRow,
    PlayerMoves, WireError, WireMove,
};
