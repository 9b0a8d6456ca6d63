//! Item detail view: the full record, fetched fresh from the server when the
//! screen opened, with the description wrapped to the panel width.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::api::Item;
use crate::tui::component::Component;

pub struct ItemView<'a> {
    item: &'a Item,
}

impl<'a> ItemView<'a> {
    pub fn new(item: &'a Item) -> Self {
        Self { item }
    }
}

impl Component for ItemView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.item.name))
            .title_bottom(Line::from(" e Edit  Esc Back to List ").centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let label = Style::default().fg(Color::DarkGray);
        let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Quantity   ", label),
                Span::styled(self.item.quantity.to_string(), value),
            ]),
            Line::from(vec![
                Span::styled("Price      ", label),
                Span::styled(format!("${:.2}", self.item.price), value),
            ]),
            Line::from(vec![
                Span::styled("Category   ", label),
                Span::styled(self.item.category.as_str(), value),
            ]),
            Line::from(""),
            Line::from(Span::styled("Description", label)),
        ];

        let wrap_width = inner.width.saturating_sub(2).max(10) as usize;
        for wrapped in textwrap::wrap(&self.item.description, wrap_width) {
            lines.push(Line::from(wrapped.into_owned()));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
