//! Terminal demo host
//!
//! Two independent infinite-scroll feeds share one [`ScrollDispatcher`]. Each
//! feed registers on startup, forwards every wheel or key scroll, and loads
//! another page once scrolling settles past the trigger percentage.
//!
//! [`ScrollDispatcher`]: crate::dispatch::ScrollDispatcher

mod demo_events;
mod demo_render;
mod demo_state;
mod feed;

pub use demo_state::{DemoApp, EVENT_POLL_TIMEOUT, PANE_IDS, Pane};
pub use feed::FeedState;
