mod scroll_state;
mod scroll_trait;
mod viewport;

pub use scroll_state::ScrollState;
pub use scroll_trait::{ElementMetrics, ScrollSurface};
pub use viewport::{DocumentOffsets, ViewportOffsets, resolve_scroll_offset};
