//! Fixed-timestep driver for the update loop.
//!
//! The host loop measures wall-clock time per frame; [`FixedTimestep`] turns it
//! into whole engine ticks of `step_ms` each and carries the remainder into
//! the next frame. Catch-up after a stall is capped so one slow frame cannot
//! snowball into a burst of gravity steps.

use std::time::Duration;

use crate::types::TICK_MS;

/// Default cap on ticks run for a single frame
pub const MAX_STEPS_PER_FRAME: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTimestep {
    step: Duration,
    accumulator: Duration,
    max_steps_per_frame: u32,
}

impl FixedTimestep {
    pub fn new(step_ms: u32, max_steps_per_frame: u32) -> Self {
        Self {
            step: Duration::from_millis(step_ms.max(1) as u64),
            accumulator: Duration::ZERO,
            max_steps_per_frame: max_steps_per_frame.max(1),
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    pub fn step_ms(&self) -> u32 {
        self.step.as_millis() as u32
    }

    /// Add `elapsed` wall-clock time and return how many ticks are due
    ///
    /// When more than `max_steps_per_frame` ticks are due, the excess is
    /// dropped rather than carried over.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;
        let mut steps = 0;
        while self.accumulator >= self.step {
            if steps == self.max_steps_per_frame {
                self.accumulator = Duration::ZERO;
                break;
            }
            self.accumulator -= self.step;
            steps += 1;
        }
        steps
    }

    /// Time left until the next tick is due
    pub fn until_next(&self) -> Duration {
        self.step.saturating_sub(self.accumulator)
    }

    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(TICK_MS, MAX_STEPS_PER_FRAME)
    }
}
