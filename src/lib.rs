//! scroll-dispatch library - debounced near-bottom scroll triggers
//!
//! Independent UI components register a percentage-based "near the bottom"
//! check with one shared [`ScrollDispatcher`]. Scroll notifications from all
//! components pass through a single debounce funnel; once scrolling settles,
//! the last notified component is measured and its callbacks run.

pub mod config;
pub mod demo;
pub mod dispatch;
pub mod error;
pub mod scroll;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use dispatch::{ScrollCheckConfig, ScrollDirection, ScrollDispatcher, ScrollEvent};
pub use error::ScrollDispatchError;
pub use scroll::{DocumentOffsets, ElementMetrics, ScrollSurface, ViewportOffsets};
