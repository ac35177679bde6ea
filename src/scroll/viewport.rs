//! Viewport-level scroll offsets
//!
//! Some hosts report the authoritative scroll position on the element itself,
//! others only on the page or document. When an element's own offset is zero
//! the dispatcher walks these sources in order and takes the first non-zero one.

use std::cell::Cell;

use super::scroll_trait::ScrollSurface;

/// Page-level offset sources consulted when an element reports no offset
pub trait ViewportOffsets {
    /// Vertical offset of the whole viewport
    fn page_y_offset(&self) -> f64;

    /// Scroll offset of the document root
    fn root_scroll_top(&self) -> f64;

    /// Scroll offset of the document body
    fn body_scroll_top(&self) -> f64;
}

/// Viewport offsets owned by the host and updated as the page scrolls
///
/// All offsets start at zero, which makes the fallback chain a no-op for hosts
/// that only ever scroll individual elements.
#[derive(Debug, Default)]
pub struct DocumentOffsets {
    page_y_offset: Cell<f64>,
    root_scroll_top: Cell<f64>,
    body_scroll_top: Cell<f64>,
}

impl DocumentOffsets {
    pub fn new(page_y_offset: f64, root_scroll_top: f64, body_scroll_top: f64) -> Self {
        Self {
            page_y_offset: Cell::new(page_y_offset),
            root_scroll_top: Cell::new(root_scroll_top),
            body_scroll_top: Cell::new(body_scroll_top),
        }
    }

    pub fn set_page_y_offset(&self, offset: f64) {
        self.page_y_offset.set(offset);
    }

    pub fn set_root_scroll_top(&self, offset: f64) {
        self.root_scroll_top.set(offset);
    }

    pub fn set_body_scroll_top(&self, offset: f64) {
        self.body_scroll_top.set(offset);
    }
}

impl ViewportOffsets for DocumentOffsets {
    fn page_y_offset(&self) -> f64 {
        self.page_y_offset.get()
    }

    fn root_scroll_top(&self) -> f64 {
        self.root_scroll_top.get()
    }

    fn body_scroll_top(&self) -> f64 {
        self.body_scroll_top.get()
    }
}

/// Zero and NaN count as "no offset reported"
fn is_reported(offset: f64) -> bool {
    offset != 0.0 && !offset.is_nan()
}

/// Current scroll offset for `element`
///
/// Order: element, page, document root, document body. Sources are read lazily
/// and the first reported one wins. When none reports an offset the body value
/// is returned as-is.
pub fn resolve_scroll_offset(element: &dyn ScrollSurface, viewport: &dyn ViewportOffsets) -> f64 {
    let element_offset = element.scroll_top();
    if is_reported(element_offset) {
        return element_offset;
    }

    let page_offset = viewport.page_y_offset();
    if is_reported(page_offset) {
        return page_offset;
    }

    let root_offset = viewport.root_scroll_top();
    if is_reported(root_offset) {
        return root_offset;
    }

    viewport.body_scroll_top()
}

#[cfg(test)]
#[path = "viewport_tests.rs"]
mod viewport_tests;
