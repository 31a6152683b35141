//! Ricochet engine library.
//!
//! Exposes the board model, the sliding-move resolver, the solution
//! recorder, replay, and the wire protocol for use by integration tests and
//! the binary entry point.

pub mod board;
pub mod engine;
pub mod protocol;
pub mod record;
pub mod replay;
pub mod resolve;
