//! Round clock.
//!
//! Counts whole seconds of play. The clock never reads wall time itself; an
//! external periodic tick advances it.

/// Elapsed play time for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundClock {
    seconds: u64,
    stopped: bool,
}

impl RoundClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the clock by `seconds` unless it has been stopped.
    pub fn tick(&mut self, seconds: u64) {
        if !self.stopped {
            self.seconds = self.seconds.saturating_add(seconds);
        }
    }

    /// Freezes the clock at its current reading.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    /// Formats the reading as zero-padded `MM:SS`. Minutes keep growing past
    /// 99 rather than wrapping.
    pub fn display(&self) -> String {
        format_elapsed(self.seconds)
    }
}

/// Formats a duration in seconds as `MM:SS`.
pub fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
