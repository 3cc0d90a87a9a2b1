// Chunk: docs/chunks/settle_timer - Quiescence delay after input
//!
//! Quiescence detection for the caret blink effect.
//!
//! After a keystroke or mouse-up the widget waits for input to go quiet before
//! reporting `Settled`. Any new input during the wait restarts it, so a burst
//! of typing settles once, after the last key.
//!
//! This is a pure data structure: the host passes `now` in and polls from its
//! own tick, there are no threads or timers here.

use std::time::{Duration, Instant};

/// A single restartable deadline.
#[derive(Debug, Clone, Default)]
pub struct SettleTimer {
    deadline: Option<Instant>,
}

impl SettleTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the delay, replacing any pending deadline.
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Cancels a pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true once when the deadline has passed, then disarms.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
