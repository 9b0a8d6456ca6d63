//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! translates keyboard events into store and workflow calls.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event/Task Model
//!
//! The event loop is synchronous. Every network call runs in a spawned tokio
//! task and reports back over an mpsc channel as an [`Action`] carrying the
//! completed result; the loop applies the corresponding store transition on
//! the main thread. Requests are never aborted — a response that arrives
//! after the user navigated away just updates the collection (or fails to
//! send and is dropped with a warning).

mod component;
mod components;
mod event;
mod ui;

use std::sync::Arc;
use std::sync::mpsc;

use log::{debug, info, warn};

use crate::api::{ApiClient, ApiError, InventoryApi, Item, ItemDraft};
use crate::core::config::ResolvedConfig;
use crate::core::store::InventoryStore;
use crate::core::workflow::{DeleteOutcome, ListWorkflow};
use crate::tui::component::EventHandler;
use crate::tui::components::{FormEvent, ItemForm, ItemListState, ListEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which screen is showing. `View` and `Form` own the record they display;
/// the list always reads straight from the store.
pub enum Screen {
    List,
    View { item: Item },
    Form(ItemForm),
}

/// TUI-specific presentation state (not part of core business logic).
pub struct TuiState {
    pub screen: Screen,
    pub list: ItemListState,
    /// Transient message: success toasts, conflict text, fetch failures.
    pub status_message: String,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            screen: Screen::List,
            list: ItemListState::new(),
            status_message: String::from("Welcome to Stockpile!"),
        }
    }
}

/// Why a single item was fetched.
enum FetchPurpose {
    View,
    Edit,
}

/// Completed results from background tasks, applied on the main thread.
enum Action {
    ListLoaded(Result<Vec<Item>, ApiError>),
    ItemFetched {
        id: String,
        purpose: FetchPurpose,
        result: Result<Item, ApiError>,
    },
    CreateFinished(Result<Item, ApiError>),
    UpdateFinished {
        id: String,
        result: Result<Item, ApiError>,
    },
    DeleteFinished {
        id: String,
        result: Result<(), ApiError>,
    },
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let api: Arc<dyn InventoryApi> = Arc::new(ApiClient::new(config.base_url));
    let mut store = InventoryStore::new(api);
    let mut workflow = ListWorkflow::new();
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();

    // Channel for completed results from background tasks
    let (tx, rx) = mpsc::channel();

    // Initial fetch: the list screen loads implicitly at startup
    spawn_list(&mut store, tx.clone());

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = store.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 8.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &store, &workflow, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Short poll while the spinner runs, long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(100)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            if matches!(event, TuiEvent::ForceQuit) {
                should_quit = true;
                continue;
            }
            if handle_event(event, &mut store, &mut workflow, &mut tui, &tx) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }

        // Apply completed background results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            handle_action(action, &mut store, &mut workflow, &mut tui);
        }
    }

    ratatui::restore();
    Ok(())
}

/// Routes one key event to the active screen. Returns true to quit.
fn handle_event(
    event: TuiEvent,
    store: &mut InventoryStore,
    workflow: &mut ListWorkflow,
    tui: &mut TuiState,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match &mut tui.screen {
        Screen::List => {
            // A pending delete captures the keyboard until resolved
            if workflow.confirming_target().is_some() {
                match event {
                    TuiEvent::InputChar('y') | TuiEvent::Submit => {
                        if let Some(id) = workflow.take_target() {
                            spawn_delete(store, id, tx.clone());
                        }
                    }
                    TuiEvent::InputChar('n') | TuiEvent::Escape => {
                        workflow.cancel_delete();
                    }
                    _ => {}
                }
                return false;
            }

            let visible = workflow.visible_page(store.items()).to_vec();
            match tui.list.handle(&event, &visible) {
                Some(ListEvent::Open(id)) => {
                    spawn_fetch(store, id, FetchPurpose::View, tx.clone());
                }
                Some(ListEvent::Edit(id)) => {
                    spawn_fetch(store, id, FetchPurpose::Edit, tx.clone());
                }
                Some(ListEvent::DeleteRequested(id)) => {
                    workflow.request_delete(&id);
                }
                Some(ListEvent::Add) => {
                    tui.screen = Screen::Form(ItemForm::add());
                }
                Some(ListEvent::Refresh) => {
                    spawn_list(store, tx.clone());
                }
                Some(ListEvent::PagePrev) => {
                    workflow.prev_page();
                    tui.list.clamp(workflow.visible_page(store.items()).len());
                }
                Some(ListEvent::PageNext) => {
                    workflow.next_page(store.items().len());
                    tui.list.clamp(workflow.visible_page(store.items()).len());
                }
                Some(ListEvent::Quit) => return true,
                None => {}
            }
        }
        Screen::View { item } => match event {
            TuiEvent::Escape => {
                tui.screen = Screen::List;
            }
            TuiEvent::InputChar('e') => {
                // The view already holds a freshly fetched record
                let form = ItemForm::edit(item);
                tui.screen = Screen::Form(form);
            }
            _ => {}
        },
        Screen::Form(form) => match form.handle_event(&event) {
            Some(FormEvent::Submit { draft, editing }) => {
                form.submitting = true;
                match editing {
                    Some(id) => spawn_update(store, id, draft, tx.clone()),
                    None => spawn_create(store, draft, tx.clone()),
                }
            }
            Some(FormEvent::Cancel) => {
                tui.screen = Screen::List;
            }
            None => {}
        },
    }
    false
}

/// Applies one completed background result.
fn handle_action(
    action: Action,
    store: &mut InventoryStore,
    workflow: &mut ListWorkflow,
    tui: &mut TuiState,
) {
    match action {
        Action::ListLoaded(result) => {
            store.apply_list(result);
            workflow.go_to_page(workflow.page(), store.items().len());
            tui.list.clamp(workflow.visible_page(store.items()).len());
        }
        Action::ItemFetched { id, purpose, result } => {
            match InventoryStore::finish_get(&id, result) {
                Ok(item) => {
                    tui.screen = match purpose {
                        FetchPurpose::View => Screen::View { item },
                        FetchPurpose::Edit => Screen::Form(ItemForm::edit(&item)),
                    };
                }
                Err(e) => {
                    // Stay on the list, the closest thing to navigating away
                    tui.status_message = e.to_string();
                    tui.screen = Screen::List;
                }
            }
        }
        Action::CreateFinished(result) => match store.apply_created(result) {
            Ok(_) => {
                tui.status_message = String::from("Item added successfully!");
                tui.screen = Screen::List;
                tui.list.clamp(workflow.visible_page(store.items()).len());
            }
            Err(e) => {
                tui.status_message = e.to_string();
                if let Screen::Form(form) = &mut tui.screen {
                    form.submitting = false;
                }
            }
        },
        Action::UpdateFinished { id, result } => match store.apply_updated(&id, result) {
            Ok(_) => {
                tui.status_message = String::from("Item updated successfully!");
                tui.screen = Screen::List;
            }
            Err(e) => {
                tui.status_message = e.to_string();
                if let Screen::Form(form) = &mut tui.screen {
                    form.submitting = false;
                }
            }
        },
        Action::DeleteFinished { id, result } => {
            let deleted = store.apply_deleted(&id, result);
            match workflow.settle_delete(deleted, store) {
                DeleteOutcome::Deleted => {
                    tui.status_message = String::from("Item deleted successfully!");
                }
                DeleteOutcome::Failed(msg) => {
                    tui.status_message = msg;
                }
            }
            tui.list.clamp(workflow.visible_page(store.items()).len());
        }
    }
}

// ============================================================================
// Background tasks
// ============================================================================

fn spawn_list(store: &mut InventoryStore, tx: mpsc::Sender<Action>) {
    info!("Spawning list fetch");
    store.begin_list();
    let api = store.api();
    tokio::spawn(async move {
        let result = api.list().await;
        if tx.send(Action::ListLoaded(result)).is_err() {
            warn!("List result dropped: receiver gone");
        }
    });
}

fn spawn_fetch(store: &InventoryStore, id: String, purpose: FetchPurpose, tx: mpsc::Sender<Action>) {
    debug!("Spawning fetch of {id}");
    let api = store.api();
    tokio::spawn(async move {
        let result = api.get(&id).await;
        if tx
            .send(Action::ItemFetched { id, purpose, result })
            .is_err()
        {
            warn!("Fetch result dropped: receiver gone");
        }
    });
}

fn spawn_create(store: &InventoryStore, draft: ItemDraft, tx: mpsc::Sender<Action>) {
    info!("Spawning create of \"{}\"", draft.name);
    let api = store.api();
    tokio::spawn(async move {
        let result = api.create(&draft).await;
        if tx.send(Action::CreateFinished(result)).is_err() {
            warn!("Create result dropped: receiver gone");
        }
    });
}

fn spawn_update(store: &InventoryStore, id: String, draft: ItemDraft, tx: mpsc::Sender<Action>) {
    info!("Spawning update of {id}");
    let api = store.api();
    tokio::spawn(async move {
        let result = api.update(&id, &draft).await;
        if tx.send(Action::UpdateFinished { id, result }).is_err() {
            warn!("Update result dropped: receiver gone");
        }
    });
}

fn spawn_delete(store: &InventoryStore, id: String, tx: mpsc::Sender<Action>) {
    info!("Spawning delete of {id}");
    let api = store.api();
    tokio::spawn(async move {
        let result = api.delete(&id).await;
        if tx.send(Action::DeleteFinished { id, result }).is_err() {
            warn!("Delete result dropped: receiver gone");
        }
    });
}
