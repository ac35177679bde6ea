//! Tests for DemoApp state

use super::*;
use crate::test_utils::test_helpers::{TEST_PAGE_SIZE, TEST_VIEWPORT, test_app, test_config};

const QUIET: Duration = Duration::from_millis(100);

#[test]
fn test_new_registers_every_pane() {
    let app = DemoApp::new(&test_config());

    assert_eq!(app.panes.len(), PANE_IDS.len());
    for id in PANE_IDS {
        assert!(app.dispatcher.is_registered(id), "{} not registered", id);
    }
    assert_eq!(app.focus, 0);
    assert!(!app.should_quit());
}

#[test]
fn test_new_loads_initial_page() {
    let app = DemoApp::new(&test_config());
    let pane = &app.panes[0];

    assert_eq!(pane.feed.borrow().len(), TEST_PAGE_SIZE);
    assert_eq!(pane.scroll.borrow().content_lines, TEST_PAGE_SIZE as u32);
}

#[test]
fn test_scroll_moves_pane_and_queues_dispatch() {
    let mut app = test_app();
    let start = Instant::now();

    app.scroll_pane_at(0, ScrollDirection::Down, 2, start);

    assert_eq!(app.panes[0].scroll.borrow().offset, 2);
    assert!(app.dispatcher.has_pending());
    assert_eq!(app.panes[0].feed.borrow().checks, 0);
}

#[test]
fn test_scroll_below_trigger_only_counts_check() {
    let mut app = test_app();
    let start = Instant::now();

    // Offset 2 of 6 scrollable lines, trigger at 4.2
    app.scroll_pane_at(0, ScrollDirection::Down, 2, start);
    assert!(app.tick_at(start + QUIET));

    let feed = app.panes[0].feed.borrow();
    assert_eq!(feed.checks, 1);
    assert_eq!(feed.len(), TEST_PAGE_SIZE);
}

#[test]
fn test_scroll_past_trigger_loads_page() {
    let mut app = test_app();
    let start = Instant::now();

    app.scroll_pane_at(0, ScrollDirection::Down, 5, start);
    assert!(app.tick_at(start + QUIET));

    let pane = &app.panes[0];
    assert_eq!(pane.feed.borrow().checks, 1);
    assert_eq!(pane.feed.borrow().len(), TEST_PAGE_SIZE * 2);
    assert_eq!(pane.scroll.borrow().content_lines, (TEST_PAGE_SIZE * 2) as u32);
    assert_eq!(
        pane.scroll.borrow().max_offset,
        (TEST_PAGE_SIZE * 2) as u16 - TEST_VIEWPORT
    );
}

#[test]
fn test_burst_across_panes_dispatches_last_only() {
    let mut app = test_app();
    let start = Instant::now();

    app.scroll_pane_at(0, ScrollDirection::Down, 6, start);
    app.scroll_pane_at(1, ScrollDirection::Down, 6, start + Duration::from_millis(10));
    assert!(!app.tick_at(start + Duration::from_millis(60)));
    assert!(app.tick_at(start + Duration::from_millis(110)));

    assert_eq!(app.panes[0].feed.borrow().checks, 0);
    assert_eq!(app.panes[0].feed.borrow().len(), TEST_PAGE_SIZE);
    assert_eq!(app.panes[1].feed.borrow().checks, 1);
    assert_eq!(app.panes[1].feed.borrow().len(), TEST_PAGE_SIZE * 2);
}

#[test]
fn test_scroll_unknown_pane_is_ignored() {
    let mut app = test_app();
    app.scroll_pane_at(7, ScrollDirection::Down, 1, Instant::now());
    assert!(!app.dispatcher.has_pending());
}

#[test]
fn test_poll_timeout_idle() {
    let app = test_app();
    assert_eq!(app.poll_timeout_at(Instant::now()), EVENT_POLL_TIMEOUT);
}

#[test]
fn test_poll_timeout_shrinks_while_pending() {
    let mut app = test_app();
    let start = Instant::now();
    app.scroll_pane_at(0, ScrollDirection::Down, 1, start);

    assert_eq!(
        app.poll_timeout_at(start + Duration::from_millis(70)),
        Duration::from_millis(30)
    );
}

#[test]
fn test_pane_at_uses_rendered_areas() {
    let mut app = test_app();
    app.panes[0].area = Rect::new(0, 0, 10, 5);
    app.panes[1].area = Rect::new(10, 0, 10, 5);

    assert_eq!(app.pane_at(3, 2), Some(0));
    assert_eq!(app.pane_at(12, 2), Some(1));
    assert_eq!(app.pane_at(25, 2), None);
    assert_eq!(app.pane_at(3, 6), None);
}

#[test]
fn test_focus_next_wraps() {
    let mut app = test_app();
    app.focus_next();
    assert_eq!(app.focus, 1);
    app.focus_next();
    assert_eq!(app.focus, 0);
}

#[test]
fn test_short_feed_is_topped_up_to_overflow_viewport() {
    let mut config = test_config();
    config.feed.page_size = 3;
    let mut app = DemoApp::new(&config);
    app.panes[0].fill_viewport(20);

    let pane = &app.panes[0];
    assert_eq!(pane.feed.borrow().len(), 21);
    assert_eq!(pane.feed.borrow().pages_loaded, 7);
    assert_eq!(pane.scroll.borrow().max_offset, 1);
}

#[test]
fn test_short_feed_keeps_growing_after_top_up() {
    let mut config = test_config();
    config.feed.page_size = 3;
    let mut app = DemoApp::new(&config);
    app.panes[0].fill_viewport(20);
    let start = Instant::now();

    app.scroll_pane_at(0, ScrollDirection::Down, 1, start);
    assert!(app.tick_at(start + QUIET));

    // Offset 1 of 1 scrollable line passes the 70% trigger
    let feed = app.panes[0].feed.borrow();
    assert_eq!(feed.checks, 1);
    assert_eq!(feed.len(), 24);
}

#[test]
fn test_fill_viewport_leaves_overflowing_feed_alone() {
    let app = test_app();
    app.panes[0].fill_viewport(TEST_VIEWPORT);

    assert_eq!(app.panes[0].feed.borrow().len(), TEST_PAGE_SIZE);
    assert_eq!(app.panes[0].feed.borrow().pages_loaded, 1);
}

#[test]
fn test_fill_viewport_with_empty_pages_terminates() {
    let mut config = test_config();
    config.feed.page_size = 0;
    let app = DemoApp::new(&config);
    app.panes[0].fill_viewport(20);

    assert!(app.panes[0].feed.borrow().is_empty());
    assert_eq!(app.panes[0].scroll.borrow().max_offset, 0);
}

#[test]
fn test_jump_pane_moves_to_edges_and_notifies() {
    let mut app = test_app();
    app.jump_pane(0, ScrollDirection::Down);
    assert_eq!(app.panes[0].scroll.borrow().offset, 6);
    assert!(app.dispatcher.has_pending());

    app.jump_pane(0, ScrollDirection::Up);
    assert_eq!(app.panes[0].scroll.borrow().offset, 0);
}

#[test]
fn test_quit_deregisters_panes() {
    let mut app = test_app();
    let start = Instant::now();
    app.scroll_pane_at(0, ScrollDirection::Down, 6, start);

    app.quit();

    assert!(app.should_quit());
    assert!(app.dispatcher.is_empty());

    // The queued notification no longer reaches the feed
    assert!(app.tick_at(start + QUIET));
    assert_eq!(app.panes[0].feed.borrow().checks, 0);
}
