//! Round recording.
//!
//! Applies resolved moves to the active board, keeps the ordered move log,
//! detects wins, and tracks elapsed play time.

pub mod clock;
pub mod recorder;

pub use clock::{format_elapsed, RoundClock};
pub use recorder::{MoveOutcome, Recorder, RoundSignal};
