//! Leading-edge throttle with a trailing-edge guarantee
//!
//! At most one recompute runs per window. Events arriving inside an open
//! window only mark it dirty; when the window closes a dirty window owes
//! exactly one more recompute, so the last slider position is never left
//! unrendered. Only one window exists at a time.

use std::time::Duration;
use tokio::time::Instant;
use tracing::trace;

/// What to do with an incoming event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleDecision {
    /// Recompute now; a window was opened
    RunNow,
    /// Coalesced into the open window
    Deferred,
}

#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    window_end: Option<Instant>,
    dirty: bool,
}

impl Throttle {
    /// A zero interval disables throttling
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            window_end: None,
            dirty: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn on_event(&mut self, now: Instant) -> ThrottleDecision {
        if self.interval.is_zero() {
            return ThrottleDecision::RunNow;
        }

        match self.window_end {
            Some(end) if now < end => {
                self.dirty = true;
                trace!("Throttle window open, deferring");
                ThrottleDecision::Deferred
            }
            _ => {
                // A window that expired unserviced is superseded by this run
                self.window_end = Some(now + self.interval);
                self.dirty = false;
                ThrottleDecision::RunNow
            }
        }
    }

    /// End of the open window, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.window_end
    }

    /// Close the window once `now` has reached it.
    ///
    /// Returns true when events were coalesced and a trailing recompute is
    /// owed. Does not open a new window.
    pub fn on_deadline(&mut self, now: Instant) -> bool {
        match self.window_end {
            Some(end) if now >= end => {
                self.window_end = None;
                std::mem::take(&mut self.dirty)
            }
            _ => false,
        }
    }

    /// Close any window immediately, returning whether a recompute is owed
    pub fn flush(&mut self) -> bool {
        self.window_end = None;
        std::mem::take(&mut self.dirty)
    }

    pub fn is_pending(&self) -> bool {
        self.dirty
    }
}
