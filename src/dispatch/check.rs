//! Per-component scroll check configuration and evaluation

use std::fmt;
use std::rc::{Rc, Weak};

use crate::scroll::{ScrollSurface, ViewportOffsets, resolve_scroll_offset};

/// Zero-argument side-effecting callback run on dispatch
pub type ScrollCallback = Box<dyn FnMut()>;

/// Result of evaluating one registered component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CheckOutcome {
    /// The element was dropped before dispatch; no callback ran
    ElementDropped,
    /// `before_check` ran, the threshold was not exceeded
    Below,
    /// Both callbacks ran
    Passed,
}

/// Everything the dispatcher needs to evaluate one component.
///
/// The element is held weakly: the registering component owns it and must
/// deregister before dropping it.
pub struct ScrollCheckConfig {
    before_check: ScrollCallback,
    check_passed: ScrollCallback,
    element: Weak<dyn ScrollSurface>,
    trigger_percentage: f64,
}

impl ScrollCheckConfig {
    /// # Arguments
    /// * `element` - Scrollable surface to measure on each dispatch
    /// * `trigger_percentage` - Share of the scrollable distance (0-100) the offset must exceed.
    ///   Values outside that range are accepted as-is.
    /// * `before_check` - Runs on every dispatch for this component
    /// * `check_passed` - Runs only when the threshold is exceeded
    pub fn new<S, B, P>(
        element: &Rc<S>,
        trigger_percentage: f64,
        before_check: B,
        check_passed: P,
    ) -> Self
    where
        S: ScrollSurface + 'static,
        B: FnMut() + 'static,
        P: FnMut() + 'static,
    {
        let element: Weak<S> = Rc::downgrade(element);
        Self {
            before_check: Box::new(before_check),
            check_passed: Box::new(check_passed),
            element,
            trigger_percentage,
        }
    }

    pub fn trigger_percentage(&self) -> f64 {
        self.trigger_percentage
    }

    /// The element, if its owner still holds it
    pub fn element(&self) -> Option<Rc<dyn ScrollSurface>> {
        self.element.upgrade()
    }

    /// Measure the element and run the callbacks
    pub(crate) fn run(&mut self, viewport: &dyn ViewportOffsets) -> CheckOutcome {
        let Some(element) = self.element.upgrade() else {
            return CheckOutcome::ElementDropped;
        };

        // Measure before any callback runs so callbacks are free to mutate the element
        let offset = resolve_scroll_offset(&*element, viewport);
        let scrollable_distance = element.scrollable_distance();
        drop(element);

        (self.before_check)();

        if threshold_exceeded(offset, scrollable_distance, self.trigger_percentage) {
            (self.check_passed)();
            CheckOutcome::Passed
        } else {
            CheckOutcome::Below
        }
    }
}

impl fmt::Debug for ScrollCheckConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollCheckConfig")
            .field("trigger_percentage", &self.trigger_percentage)
            .field("element_alive", &(self.element.strong_count() > 0))
            .finish_non_exhaustive()
    }
}

/// Whether `offset` is strictly past `trigger_percentage` percent of `scrollable_distance`
pub fn threshold_exceeded(offset: f64, scrollable_distance: f64, trigger_percentage: f64) -> bool {
    offset > scrollable_distance * (trigger_percentage / 100.0)
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod check_tests;
