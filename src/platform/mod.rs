//! Platform glue: wall-clock frame timing.
//!
//! Everything here is shell-side; the simulation never touches the clock
//! and takes delta time as a plain argument.

use std::time::Instant;

/// Per-frame delta-time source. Monotonic and non-negative by
/// construction: `Instant` never goes backwards.
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds elapsed since the previous call (or construction).
    pub fn delta_seconds(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}
