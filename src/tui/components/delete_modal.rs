//! Delete confirmation overlay. Nothing is sent to the server until the user
//! confirms; cancelling leaves everything untouched.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::component::Component;

pub struct DeleteModal<'a> {
    item_name: &'a str,
}

impl<'a> DeleteModal<'a> {
    pub fn new(item_name: &'a str) -> Self {
        Self { item_name }
    }
}

impl Component for DeleteModal<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 20, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" Delete Item ")
            .title_bottom(Line::from(" y Confirm  n/Esc Cancel ").centered());

        let body = Paragraph::new(vec![
            Line::from(""),
            Line::from(format!("Delete \"{}\"?", self.item_name)),
            Line::from("This cannot be undone."),
        ])
        .alignment(Alignment::Center)
        .block(block);

        frame.render_widget(body, overlay);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
