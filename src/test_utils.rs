//! Shared test utilities for scroll-dispatch
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::config::{Config, DispatchConfig, FeedConfig};
    use crate::demo::DemoApp;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Items per page in test feeds
    pub const TEST_PAGE_SIZE: usize = 10;

    /// Visible lines per pane in test apps
    pub const TEST_VIEWPORT: u16 = 4;

    /// Config with small feeds and the default 100ms quiet period / 70% trigger
    pub fn test_config() -> Config {
        Config {
            dispatch: DispatchConfig::default(),
            feed: FeedConfig {
                page_size: TEST_PAGE_SIZE,
                initial_pages: 1,
            },
        }
    }

    /// Demo app whose panes behave as if rendered with a 4 line viewport
    pub fn test_app() -> DemoApp {
        let app = DemoApp::new(&test_config());
        for pane in &app.panes {
            let len = pane.feed.borrow().len() as u32;
            pane.scroll.borrow_mut().update_bounds(len, TEST_VIEWPORT);
        }
        app
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
