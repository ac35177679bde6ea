//! Debounced near-bottom scroll triggers
//!
//! Components register a [`ScrollCheckConfig`] with a shared [`ScrollDispatcher`],
//! forward their raw scroll events to it, and get called back once scrolling
//! settles past their trigger percentage.

mod check;
mod dispatcher;
mod event;
mod funnel;

pub use check::{ScrollCallback, ScrollCheckConfig, threshold_exceeded};
pub use dispatcher::ScrollDispatcher;
pub use event::{ScrollDirection, ScrollEvent, StopPropagation};
pub use funnel::{DEFAULT_QUIET_PERIOD_MS, ScrollFunnel};
