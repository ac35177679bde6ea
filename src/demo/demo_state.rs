use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use ratatui::layout::{Position, Rect};

use super::feed::FeedState;
use crate::config::{Config, FeedConfig};
use crate::dispatch::{ScrollCheckConfig, ScrollDirection, ScrollDispatcher, ScrollEvent};
use crate::scroll::ScrollState;

/// Upper bound for event polling - allows periodic UI refresh
pub const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Component ids of the demo panes, left to right
pub const PANE_IDS: [&str; 2] = ["left", "right"];

/// One scrollable feed and the state it shares with its scroll callbacks
pub struct Pane {
    pub id: String,
    pub feed: Rc<RefCell<FeedState>>,
    pub scroll: Rc<RefCell<ScrollState>>,
    /// Area the pane was last rendered into, used for mouse routing
    pub area: Rect,
}

impl Pane {
    fn new(id: &str, config: &FeedConfig) -> Self {
        let feed = FeedState::new(id, config.page_size, config.initial_pages);
        let mut scroll = ScrollState::new();
        scroll.update_bounds(feed.len() as u32, 0);

        Self {
            id: id.to_string(),
            feed: Rc::new(RefCell::new(feed)),
            scroll: Rc::new(RefCell::new(scroll)),
            area: Rect::default(),
        }
    }

    /// Fit the scroll bounds to `viewport_height`, loading pages until the feed overflows it
    ///
    /// A feed that fits its viewport can never be scrolled past the trigger, so it
    /// would otherwise stop growing.
    pub fn fill_viewport(&self, viewport_height: u16) {
        let mut feed = self.feed.borrow_mut();
        let mut scroll = self.scroll.borrow_mut();
        scroll.update_bounds(feed.len() as u32, viewport_height);

        while scroll.max_offset == 0 && feed.page_size > 0 {
            feed.load_page();
            log::debug!("{} topped up to page {}", feed.label, feed.pages_loaded);
            scroll.set_content_lines(feed.len() as u32);
        }
    }

    /// Scroll check that counts every dispatch and loads a page past the trigger
    fn scroll_check(&self, trigger_percentage: f64) -> ScrollCheckConfig {
        let before_feed = Rc::clone(&self.feed);
        let passed_feed = Rc::clone(&self.feed);
        let passed_scroll = Rc::clone(&self.scroll);

        ScrollCheckConfig::new(
            &self.scroll,
            trigger_percentage,
            move || before_feed.borrow_mut().record_check(),
            move || {
                let mut feed = passed_feed.borrow_mut();
                feed.load_page();
                log::debug!("{} loaded page {}", feed.label, feed.pages_loaded);
                passed_scroll
                    .borrow_mut()
                    .set_content_lines(feed.len() as u32);
            },
        )
    }
}

pub struct DemoApp {
    pub dispatcher: ScrollDispatcher,
    pub panes: Vec<Pane>,
    pub focus: usize,
    /// Replaces the key hints in the status line (config warnings)
    pub status: Option<String>,
    should_quit: bool,
}

impl DemoApp {
    pub fn new(config: &Config) -> Self {
        let mut app = Self {
            dispatcher: ScrollDispatcher::from_config(&config.dispatch),
            panes: Vec::with_capacity(PANE_IDS.len()),
            focus: 0,
            status: None,
            should_quit: false,
        };

        for id in PANE_IDS {
            let pane = Pane::new(id, &config.feed);
            app.dispatcher.register(
                pane.id.clone(),
                pane.scroll_check(config.dispatch.trigger_percentage),
            );
            app.panes.push(pane);
        }

        app
    }

    /// Scroll pane `index` by `lines` and forward the event to the dispatcher
    pub fn scroll_pane(&mut self, index: usize, direction: ScrollDirection, lines: u16) {
        self.scroll_pane_at(index, direction, lines, Instant::now());
    }

    pub fn scroll_pane_at(
        &mut self,
        index: usize,
        direction: ScrollDirection,
        lines: u16,
        now: Instant,
    ) {
        self.move_pane_at(index, direction, now, |scroll| match direction {
            ScrollDirection::Up => scroll.scroll_up(lines),
            ScrollDirection::Down => scroll.scroll_down(lines),
        });
    }

    /// Scroll pane `index` by half a viewport
    pub fn page_pane(&mut self, index: usize, direction: ScrollDirection) {
        self.move_pane_at(index, direction, Instant::now(), |scroll| match direction {
            ScrollDirection::Up => scroll.page_up(),
            ScrollDirection::Down => scroll.page_down(),
        });
    }

    /// Jump pane `index` to its top or bottom
    pub fn jump_pane(&mut self, index: usize, direction: ScrollDirection) {
        self.move_pane_at(index, direction, Instant::now(), |scroll| match direction {
            ScrollDirection::Up => scroll.jump_to_top(),
            ScrollDirection::Down => scroll.jump_to_bottom(),
        });
    }

    fn move_pane_at(
        &mut self,
        index: usize,
        direction: ScrollDirection,
        now: Instant,
        movement: impl FnOnce(&mut ScrollState),
    ) {
        let Some(pane) = self.panes.get(index) else {
            return;
        };

        movement(&mut pane.scroll.borrow_mut());

        let mut event = ScrollEvent::new(direction);
        self.dispatcher.notify_at(&pane.id, &mut event, now);
    }

    /// Run the debounced dispatch if it is due
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> bool {
        self.dispatcher.tick_at(now)
    }

    /// Wake up no later than the next pending dispatch
    pub fn poll_timeout(&self) -> Duration {
        self.poll_timeout_at(Instant::now())
    }

    pub fn poll_timeout_at(&self, now: Instant) -> Duration {
        self.dispatcher
            .time_until_dispatch_at(now)
            .map_or(EVENT_POLL_TIMEOUT, |remaining| {
                remaining.min(EVENT_POLL_TIMEOUT)
            })
    }

    /// Pane under the given terminal cell
    pub fn pane_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.panes
            .iter()
            .position(|pane| pane.area.contains(position))
    }

    pub fn focus_next(&mut self) {
        if !self.panes.is_empty() {
            self.focus = (self.focus + 1) % self.panes.len();
        }
    }

    /// Deregister every pane and stop the event loop
    pub fn quit(&mut self) {
        for pane in &self.panes {
            self.dispatcher.deregister(&pane.id);
        }
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
#[path = "demo_state_tests.rs"]
mod demo_state_tests;
