//! Frame clock for hosts without their own time source.
//!
//! The engine only ever consumes a plain `f32` time value; [`FrameClock`] is
//! the stock implementation measuring seconds since construction, for demos
//! and hosts that do not already track frame time.
use std::time::Instant;

/// Monotonic seconds-since-start time source.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    started: Instant,
}

impl FrameClock {
    /// Starts a clock at zero.
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Seconds elapsed since construction or the last [`FrameClock::restart`].
    pub fn elapsed_seconds(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }

    /// Resets the clock to zero.
    pub fn restart(&mut self) {
        self.started = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
