//! Shared debounce funnel for scroll notifications
//!
//! Every component pushes into the same single-slot funnel. A push overwrites
//! whatever identifier is waiting and restarts the quiet period, so a burst of
//! notifications from any mix of components collapses into one dispatch for
//! the last identifier seen.

use std::time::{Duration, Instant};

pub const DEFAULT_QUIET_PERIOD_MS: u64 = 100;

#[derive(Debug)]
pub struct ScrollFunnel {
    /// Time that must pass after the last push before the slot is released
    quiet_period: Duration,
    /// Identifier of the most recent notification
    pending: Option<String>,
    /// Timestamp of the most recent push
    last_input_time: Option<Instant>,
}

impl Default for ScrollFunnel {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_QUIET_PERIOD_MS))
    }
}

impl ScrollFunnel {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
            last_input_time: None,
        }
    }

    pub fn push(&mut self, id: &str) {
        self.push_at(id, Instant::now());
    }

    pub fn push_at(&mut self, id: &str, now: Instant) {
        if let Some(previous) = self.pending.as_deref() {
            if previous != id {
                log::debug!("Scroll notification for {:?} replaces {:?}", id, previous);
            }
        }
        self.pending = Some(id.to_string());
        self.last_input_time = Some(now);
    }

    pub fn is_ready_at(&self, now: Instant) -> bool {
        if self.pending.is_none() {
            return false;
        }

        match self.last_input_time {
            Some(last_time) => now.saturating_duration_since(last_time) >= self.quiet_period,
            None => false,
        }
    }

    /// Release the pending identifier once the quiet period has elapsed
    pub fn take_ready(&mut self) -> Option<String> {
        self.take_ready_at(Instant::now())
    }

    pub fn take_ready_at(&mut self, now: Instant) -> Option<String> {
        if !self.is_ready_at(now) {
            return None;
        }
        self.last_input_time = None;
        self.pending.take()
    }

    /// Remaining quiet time, or `None` when nothing is waiting
    pub fn time_until_ready_at(&self, now: Instant) -> Option<Duration> {
        self.pending.as_ref()?;
        let last_time = self.last_input_time?;
        let elapsed = now.saturating_duration_since(last_time);
        Some(self.quiet_period.saturating_sub(elapsed))
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_id(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }
}

#[cfg(test)]
#[path = "funnel_tests.rs"]
mod funnel_tests;
