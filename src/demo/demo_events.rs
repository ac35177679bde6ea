//! Keyboard and mouse handling for the demo
//!
//! Routes wheel events to the pane under the cursor and key scrolls to the
//! focused pane. Every scroll is forwarded to the dispatcher by the pane.

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

use super::demo_state::DemoApp;
use crate::dispatch::ScrollDirection;

const WHEEL_SCROLL_LINES: u16 = 3;
const KEY_SCROLL_LINES: u16 = 1;

impl DemoApp {
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        let focus = self.focus;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Tab => self.focus_next(),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_pane(focus, ScrollDirection::Down, KEY_SCROLL_LINES)
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_pane(focus, ScrollDirection::Up, KEY_SCROLL_LINES)
            }
            KeyCode::PageDown => self.page_pane(focus, ScrollDirection::Down),
            KeyCode::PageUp => self.page_pane(focus, ScrollDirection::Up),
            KeyCode::End => self.jump_pane(focus, ScrollDirection::Down),
            KeyCode::Home => self.jump_pane(focus, ScrollDirection::Up),
            _ => {}
        }
    }

    /// Falls back to the focused pane when the cursor is outside all panes
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let direction = match mouse.kind {
            MouseEventKind::ScrollUp => ScrollDirection::Up,
            MouseEventKind::ScrollDown => ScrollDirection::Down,
            _ => return,
        };
        let index = self.pane_at(mouse.column, mouse.row).unwrap_or(self.focus);
        self.scroll_pane(index, direction, WHEEL_SCROLL_LINES);
    }
}

#[cfg(test)]
#[path = "demo_events_tests.rs"]
mod demo_events_tests;
