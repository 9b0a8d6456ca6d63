//! Bottom status bar: loading spinner, the store's inline error status, or
//! the most recent transient message (success toasts, conflict text).

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::tui::component::Component;

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

pub struct StatusBar<'a> {
    pub loading: bool,
    pub error: Option<&'a str>,
    pub message: &'a str,
    pub spinner_frame: usize,
}

impl Component for StatusBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = if self.loading {
            Span::styled(
                format!(
                    " {} Loading...",
                    SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
                ),
                Style::default().fg(Color::Yellow),
            )
        } else if let Some(error) = self.error {
            Span::styled(format!(" {error}"), Style::default().fg(Color::Red))
        } else {
            Span::styled(
                format!(" {}", self.message),
                Style::default().fg(Color::Gray),
            )
        };
        frame.render_widget(span, area);
    }
}
