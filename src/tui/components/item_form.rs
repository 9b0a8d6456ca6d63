//! # Item Form Component
//!
//! Add/edit form for a draft item. Field-level validation mirrors the
//! backend's contract: non-empty strings, quantity and price strictly
//! greater than zero. Validation failures stay local; only a clean draft is
//! submitted.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::api::{Item, ItemDraft};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const FIELD_COUNT: usize = 5;
const LABELS: [&str; FIELD_COUNT] = ["Item Name", "Quantity", "Price", "Category", "Description"];

/// High-level events emitted by the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// A validated draft, ready to send. Carries the id when editing.
    Submit {
        draft: ItemDraft,
        editing: Option<String>,
    },
    Cancel,
}

/// Text-buffer form state. Buffers hold raw user input; numeric parsing
/// happens at validation time so a half-typed "3." never crashes anything.
pub struct ItemForm {
    buffers: [String; FIELD_COUNT],
    errors: [Option<&'static str>; FIELD_COUNT],
    focus: usize,
    editing: Option<String>,
    /// True while a submit is in flight; blocks double submission.
    pub submitting: bool,
}

impl ItemForm {
    /// Empty form for adding a new item.
    pub fn add() -> Self {
        Self {
            buffers: Default::default(),
            errors: [None; FIELD_COUNT],
            focus: 0,
            editing: None,
            submitting: false,
        }
    }

    /// Form pre-filled from an existing item, for editing.
    pub fn edit(item: &Item) -> Self {
        Self {
            buffers: [
                item.name.clone(),
                item.quantity.to_string(),
                format!("{:.2}", item.price),
                item.category.clone(),
                item.description.clone(),
            ],
            errors: [None; FIELD_COUNT],
            focus: 0,
            editing: Some(item.id.clone()),
            submitting: false,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Validates every field, recording per-field messages. Returns the
    /// draft only when all fields pass.
    fn validate(&mut self) -> Option<ItemDraft> {
        self.errors = [None; FIELD_COUNT];

        if self.buffers[0].trim().is_empty() {
            self.errors[0] = Some("Item name is required");
        }
        let quantity = self.buffers[1].trim().parse::<u32>().ok();
        if !quantity.is_some_and(|q| q > 0) {
            self.errors[1] = Some("Quantity must be greater than 0");
        }
        let price = self.buffers[2].trim().parse::<f64>().ok();
        if !price.is_some_and(|p| p > 0.0) {
            self.errors[2] = Some("Price must be greater than 0");
        }
        if self.buffers[3].trim().is_empty() {
            self.errors[3] = Some("Category is required");
        }
        if self.buffers[4].trim().is_empty() {
            self.errors[4] = Some("Description is required");
        }

        if self.errors.iter().any(|e| e.is_some()) {
            return None;
        }
        Some(ItemDraft {
            name: self.buffers[0].trim().to_string(),
            quantity: quantity?,
            price: price?,
            category: self.buffers[3].trim().to_string(),
            description: self.buffers[4].trim().to_string(),
        })
    }
}

impl EventHandler for ItemForm {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FormEvent> {
        if self.submitting {
            return None;
        }
        match event {
            TuiEvent::Escape => Some(FormEvent::Cancel),
            TuiEvent::NextField | TuiEvent::CursorDown => {
                self.focus = (self.focus + 1) % FIELD_COUNT;
                None
            }
            TuiEvent::PrevField | TuiEvent::CursorUp => {
                self.focus = (self.focus + FIELD_COUNT - 1) % FIELD_COUNT;
                None
            }
            TuiEvent::InputChar(c) => {
                self.buffers[self.focus].push(*c);
                None
            }
            TuiEvent::Backspace => {
                self.buffers[self.focus].pop();
                None
            }
            TuiEvent::Submit => {
                let editing = self.editing.clone();
                self.validate().map(|draft| FormEvent::Submit { draft, editing })
            }
            _ => None,
        }
    }
}

impl Component for ItemForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = if self.is_editing() {
            " Edit Item "
        } else {
            " Add New Item "
        };
        let help = if self.submitting {
            " Saving... "
        } else {
            " Tab/↑↓ Field  Enter Save  Esc Cancel "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title)
            .title_bottom(Line::from(help).centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Two lines per field: "Label: value" and an error line beneath.
        let constraints = vec![Constraint::Length(2); FIELD_COUNT];
        let rows = Layout::vertical(constraints).split(inner);

        for (i, row) in rows.iter().enumerate() {
            let focused = i == self.focus;
            let label_style = if focused {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let cursor = if focused && !self.submitting { "█" } else { "" };
            let line = Line::from(vec![
                Span::styled(format!("{:<12}", LABELS[i]), label_style),
                Span::styled(self.buffers[i].as_str(), label_style),
                Span::styled(cursor, label_style),
            ]);

            let mut lines = vec![line];
            if let Some(msg) = self.errors[i] {
                lines.push(Line::from(Span::styled(
                    format!("            {msg}"),
                    Style::default().fg(Color::Red),
                )));
            }
            frame.render_widget(Paragraph::new(lines), *row);
        }
    }
}
