use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::store::InventoryStore;
use crate::core::workflow::ListWorkflow;
use crate::tui::component::Component;
use crate::tui::components::{DeleteModal, ItemList, ItemView, PaginationBar, StatusBar};
use crate::tui::{Screen, TuiState};

pub fn draw_ui(
    frame: &mut Frame,
    store: &InventoryStore,
    workflow: &ListWorkflow,
    tui: &mut TuiState,
    spinner_frame: usize,
) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1), Length(1)]);
    let [title_area, main_area, footer_area, status_area] = layout.areas(frame.area());

    let TuiState {
        screen,
        list,
        status_message,
    } = tui;

    let screen_name = match screen {
        Screen::List => "Inventory",
        Screen::View { .. } => "View Item",
        Screen::Form(form) if form.is_editing() => "Edit Item",
        Screen::Form(_) => "Add Item",
    };
    frame.render_widget(
        Span::styled(
            format!(" Stockpile — {screen_name}"),
            Style::default().fg(Color::Cyan),
        ),
        title_area,
    );

    match screen {
        Screen::List => {
            let visible = workflow.visible_page(store.items());
            let confirming = workflow.confirming_target().is_some();
            ItemList::new(list, visible, confirming).render(frame, main_area);

            let (page, total_pages) = workflow.page_numbers(store.items().len());
            PaginationBar::new(page, total_pages).render(frame, footer_area);

            if let Some(target) = workflow.confirming_target() {
                let name = store
                    .items()
                    .iter()
                    .find(|item| item.id == target)
                    .map(|item| item.name.as_str())
                    .unwrap_or(target);
                DeleteModal::new(name).render(frame, frame.area());
            }
        }
        Screen::View { item } => {
            ItemView::new(item).render(frame, main_area);
        }
        Screen::Form(form) => {
            form.render(frame, main_area);
        }
    }

    StatusBar {
        loading: store.is_loading(),
        error: store.error(),
        message: status_message,
        spinner_frame,
    }
    .render(frame, status_area);
}
