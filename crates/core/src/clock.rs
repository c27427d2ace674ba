//! Gravity timing against the wall clock.
//!
//! The check is decoupled from frame pacing: a slow frame still gets its
//! gravity step. It does not catch up, though. However many intervals passed
//! since the last step, one poll yields at most one step.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct GravityClock {
    interval: Duration,
    then: Instant,
}

impl GravityClock {
    pub fn new(interval: Duration) -> Self {
        Self::starting_at(interval, Instant::now())
    }

    pub fn starting_at(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            then: start,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether a gravity step is due at `now`; restarts the interval if so.
    pub fn poll_at(&mut self, now: Instant) -> bool {
        if self.then + self.interval < now {
            self.then = now;
            true
        } else {
            false
        }
    }

    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }
}
