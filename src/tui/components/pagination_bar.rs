//! Pagination bar: "Previous  Page X of Y  Next", with the arrows dimmed at
//! the bounds. Navigating past a bound is a no-op upstream, so the dimming is
//! purely informational.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct PaginationBar {
    pub page: usize,
    pub total_pages: usize,
}

impl PaginationBar {
    pub fn new(page: usize, total_pages: usize) -> Self {
        Self { page, total_pages }
    }
}

impl Component for PaginationBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let active = Style::default().fg(Color::White);
        let disabled = Style::default().fg(Color::DarkGray);

        let prev_style = if self.page > 1 { active } else { disabled };
        let next_style = if self.page < self.total_pages {
            active
        } else {
            disabled
        };

        let line = Line::from(vec![
            Span::styled("← Previous", prev_style),
            Span::styled(
                format!("   Page {} of {}   ", self.page, self.total_pages),
                Style::default().fg(Color::Gray),
            ),
            Span::styled("Next →", next_style),
        ]);

        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }
}
