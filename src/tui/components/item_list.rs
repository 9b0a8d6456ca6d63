//! # Item List Component
//!
//! The rows of the current page: name, quantity, price, category. One row is
//! selected; the selection index is relative to the visible page, so page
//! changes and deletions clamp it rather than carrying it across.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ItemListState` lives in `TuiState`
//! - `ItemList` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::api::Item;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

/// Persistent selection state for the list screen.
pub struct ItemListState {
    pub selected: usize,
    pub list_state: ListState,
}

impl ItemListState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            list_state: ListState::default(),
        }
    }

    /// Keeps the selection inside the visible page after the page or the
    /// collection changed underneath it.
    pub fn clamp(&mut self, visible_len: usize) {
        if visible_len == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(visible_len - 1);
            self.list_state.select(Some(self.selected));
        }
    }

    pub fn move_up(&mut self, visible_len: usize) {
        if visible_len > 0 {
            self.selected = self.selected.saturating_sub(1);
            self.list_state.select(Some(self.selected));
        }
    }

    pub fn move_down(&mut self, visible_len: usize) {
        if visible_len > 0 {
            self.selected = (self.selected + 1).min(visible_len - 1);
            self.list_state.select(Some(self.selected));
        }
    }
}

/// High-level intents emitted by the list screen.
pub enum ListEvent {
    Open(String),
    Edit(String),
    DeleteRequested(String),
    Add,
    Refresh,
    PagePrev,
    PageNext,
    Quit,
}

impl ItemListState {
    /// Interprets a key against the visible page, emitting an intent.
    /// Not an `EventHandler` impl: dispatch needs the visible slice too.
    pub fn handle(&mut self, event: &TuiEvent, visible: &[Item]) -> Option<ListEvent> {
        let selected_id = || visible.get(self.selected).map(|item| item.id.clone());
        match event {
            TuiEvent::CursorUp => {
                self.move_up(visible.len());
                None
            }
            TuiEvent::CursorDown => {
                self.move_down(visible.len());
                None
            }
            TuiEvent::PagePrev => Some(ListEvent::PagePrev),
            TuiEvent::PageNext => Some(ListEvent::PageNext),
            TuiEvent::Submit => selected_id().map(ListEvent::Open),
            TuiEvent::InputChar('e') => selected_id().map(ListEvent::Edit),
            TuiEvent::InputChar('d') => selected_id().map(ListEvent::DeleteRequested),
            TuiEvent::InputChar('a') => Some(ListEvent::Add),
            TuiEvent::InputChar('r') => Some(ListEvent::Refresh),
            TuiEvent::InputChar('q') => Some(ListEvent::Quit),
            _ => None,
        }
    }
}

/// Transient render wrapper for the list screen.
pub struct ItemList<'a> {
    state: &'a mut ItemListState,
    items: &'a [Item],
    confirming: bool,
}

impl<'a> ItemList<'a> {
    pub fn new(state: &'a mut ItemListState, items: &'a [Item], confirming: bool) -> Self {
        Self {
            state,
            items,
            confirming,
        }
    }
}

impl Component for ItemList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Inventory ")
            .title_bottom(
                Line::from(" a Add  e Edit  d Delete  Enter View  ←/→ Page  r Refresh  q Quit ")
                    .centered(),
            )
            .padding(Padding::horizontal(1));

        if self.items.is_empty() {
            let empty = Paragraph::new("No items in inventory.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner_width = area.width.saturating_sub(4) as usize;
        let rows: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let qty = format!("qty {:>4}", item.quantity);
                let price = format!("${:>8.2}", item.price);
                let category = truncate_str(&item.category, 14);

                let fixed_width = qty.len() + price.len() + category.width() + 6;
                let name_width = inner_width.saturating_sub(fixed_width);
                let name = truncate_str(&item.name, name_width);
                let padded_name = format!("{:<width$}", name, width = name_width);

                let style = if i == self.state.selected {
                    if self.confirming {
                        Style::default()
                            .fg(Color::Red)
                            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                    } else {
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                    }
                } else {
                    Style::default().fg(Color::Gray)
                };

                let line = Line::from(vec![
                    Span::styled(padded_name, style),
                    Span::styled("  ", style),
                    Span::styled(qty, style),
                    Span::styled("  ", style),
                    Span::styled(price, style),
                    Span::styled("  ", style),
                    Span::styled(category, style),
                ]);
                ListItem::new(line)
            })
            .collect();

        let list = List::new(rows).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    for c in s.chars() {
        if out.width() + 3 >= max_width {
            break;
        }
        out.push(c);
    }
    out.push_str("...");
    out
}
