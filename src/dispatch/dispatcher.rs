//! Scroll dispatch registry
//!
//! One dispatcher is constructed by the host and shared by every component
//! that wants a near-bottom trigger:
//!
//! 1. `register` during component initialization
//! 2. `notify` from the component's scroll handler, for every raw scroll event
//! 3. `deregister` during component teardown
//!
//! The host loop calls `tick` regularly. After the quiet period following the
//! last notification, the most recently notified component is evaluated.

use std::collections::HashMap;
use std::rc::Rc;
use std::time::{Duration, Instant};

use super::check::{CheckOutcome, ScrollCheckConfig};
use super::event::StopPropagation;
use super::funnel::ScrollFunnel;
use crate::config::DispatchConfig;
use crate::scroll::{DocumentOffsets, ViewportOffsets};

pub struct ScrollDispatcher {
    handlers: HashMap<String, ScrollCheckConfig>,
    funnel: ScrollFunnel,
    viewport: Rc<dyn ViewportOffsets>,
}

impl Default for ScrollDispatcher {
    fn default() -> Self {
        Self::with_funnel(ScrollFunnel::default())
    }
}

impl ScrollDispatcher {
    pub fn new(quiet_period: Duration) -> Self {
        Self::with_funnel(ScrollFunnel::new(quiet_period))
    }

    pub fn from_config(config: &DispatchConfig) -> Self {
        Self::new(config.quiet_period())
    }

    fn with_funnel(funnel: ScrollFunnel) -> Self {
        Self {
            handlers: HashMap::new(),
            funnel,
            viewport: Rc::new(DocumentOffsets::default()),
        }
    }

    /// Use `viewport` as the fallback offset source instead of all-zero offsets
    pub fn with_viewport(mut self, viewport: Rc<dyn ViewportOffsets>) -> Self {
        self.viewport = viewport;
        self
    }

    /// Register (or replace) the scroll check for a component
    pub fn register(&mut self, id: impl Into<String>, config: ScrollCheckConfig) {
        let id = id.into();
        if id.is_empty() {
            log::warn!("Ignoring scroll registration without a component id");
            return;
        }

        log::debug!(
            "Registering scroll check for {:?} at {}%",
            id,
            config.trigger_percentage()
        );
        if self.handlers.insert(id, config).is_some() {
            log::debug!("Previous scroll check replaced");
        }
    }

    /// Forward a raw scroll event from component `id`
    ///
    /// Stops the event from propagating and queues `id` in the shared funnel.
    /// A later notification from any component inside the quiet period
    /// replaces this one.
    pub fn notify<E>(&mut self, id: &str, event: &mut E)
    where
        E: StopPropagation + ?Sized,
    {
        self.notify_at(id, event, Instant::now());
    }

    pub fn notify_at<E>(&mut self, id: &str, event: &mut E, now: Instant)
    where
        E: StopPropagation + ?Sized,
    {
        event.stop_propagation();
        self.funnel.push_at(id, now);
    }

    /// Run the pending dispatch if its quiet period has elapsed
    ///
    /// Returns `true` when a pending identifier was consumed.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> bool {
        match self.funnel.take_ready_at(now) {
            Some(id) => {
                self.dispatch(&id);
                true
            }
            None => false,
        }
    }

    /// Evaluate the scroll check registered for `id`
    ///
    /// Unknown or empty identifiers are ignored.
    pub fn dispatch(&mut self, id: &str) {
        if let Some(outcome) = self.evaluate(id) {
            log::debug!("Scroll check for {:?}: {:?}", id, outcome);
        }
    }

    pub(crate) fn evaluate(&mut self, id: &str) -> Option<CheckOutcome> {
        if id.is_empty() {
            return None;
        }
        let Some(config) = self.handlers.get_mut(id) else {
            log::debug!("No scroll check registered for {:?}", id);
            return None;
        };

        let outcome = config.run(&*self.viewport);
        if outcome == CheckOutcome::ElementDropped {
            log::warn!(
                "Scroll element for {:?} was dropped without deregistering",
                id
            );
        }
        Some(outcome)
    }

    /// Remove the scroll check for a component
    pub fn deregister(&mut self, id: &str) {
        if self.handlers.remove(id).is_some() {
            log::debug!("Deregistered scroll check for {:?}", id);
        }
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.handlers.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn has_pending(&self) -> bool {
        self.funnel.has_pending()
    }

    pub fn quiet_period(&self) -> Duration {
        self.funnel.quiet_period()
    }

    /// How long the host can wait before the next `tick` is due
    pub fn time_until_dispatch(&self) -> Option<Duration> {
        self.time_until_dispatch_at(Instant::now())
    }

    pub fn time_until_dispatch_at(&self, now: Instant) -> Option<Duration> {
        self.funnel.time_until_ready_at(now)
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod dispatcher_tests;
