//! Move resolution.
//!
//! Turns a selected robot and a tapped cell into the cell the robot actually
//! comes to rest on.

pub mod slide;

pub use slide::{edge_blocked, resolve_move, slide, ResolvedMove};
