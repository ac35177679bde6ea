use std::cell::RefCell;

/// Common interface for scrollable surfaces
///
/// Mirrors the three measurements a scroll container exposes: how far it is
/// scrolled, how tall its content is, and how much of that content is visible.
/// Registered components hand the dispatcher a weak handle to one of these.
pub trait ScrollSurface {
    /// Current vertical scroll offset
    fn scroll_top(&self) -> f64;

    /// Total content height, including the part scrolled out of view
    fn scroll_height(&self) -> f64;

    /// Height of the visible area
    fn client_height(&self) -> f64;

    /// Distance that can actually be scrolled (content height minus visible height)
    fn scrollable_distance(&self) -> f64 {
        self.scroll_height() - self.client_height()
    }
}

impl<T: ScrollSurface + ?Sized> ScrollSurface for RefCell<T> {
    fn scroll_top(&self) -> f64 {
        self.borrow().scroll_top()
    }

    fn scroll_height(&self) -> f64 {
        self.borrow().scroll_height()
    }

    fn client_height(&self) -> f64 {
        self.borrow().client_height()
    }
}

/// Fixed measurements of a scroll container
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ElementMetrics {
    pub fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }
}

impl ScrollSurface for ElementMetrics {
    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn scroll_height(&self) -> f64 {
        self.scroll_height
    }

    fn client_height(&self) -> f64 {
        self.client_height
    }
}

#[cfg(test)]
#[path = "scroll_trait_tests.rs"]
mod scroll_trait_tests;
