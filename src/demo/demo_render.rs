use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::demo_state::DemoApp;

// Pane border (top + bottom)
const PANE_BORDER_HEIGHT: u16 = 2;

impl DemoApp {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        // Feeds take most of the space, key hints on the bottom line
        let layout = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(frame.area());

        let columns = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(layout[0]);

        for (index, area) in columns.iter().enumerate().take(self.panes.len()) {
            self.render_pane(frame, index, *area);
        }

        self.render_status_line(frame, layout[1]);
    }

    fn render_pane(&mut self, frame: &mut Frame, index: usize, area: Rect) {
        let focused = index == self.focus;
        let pane = &mut self.panes[index];
        pane.area = area;

        let inner_height = area.height.saturating_sub(PANE_BORDER_HEIGHT);
        pane.fill_viewport(inner_height);
        let feed = pane.feed.borrow();
        let scroll = pane.scroll.borrow();

        let lines: Vec<Line> = feed
            .visible(scroll.offset as usize, inner_height as usize)
            .iter()
            .map(|item| Line::from(item.as_str()))
            .collect();

        let title = format!(
            " {} | {} items | {} checks | {} loads ",
            feed.label,
            feed.len(),
            feed.checks,
            feed.pages_loaded
        );
        let border_color = if focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title);

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let (text, color) = match &self.status {
            Some(message) => (format!(" {} ", message), Color::Yellow),
            None => {
                let state = if self.dispatcher.has_pending() {
                    "scroll pending"
                } else {
                    "idle"
                };
                (
                    format!(" q quit | Tab switch pane | j/k or wheel scroll | {} ", state),
                    Color::Gray,
                )
            }
        };

        frame.render_widget(Paragraph::new(text).style(Style::default().fg(color)), area);
    }
}

#[cfg(test)]
#[path = "demo_render_tests.rs"]
mod demo_render_tests;
