//! # TUI Components
//!
//! Each component file contains its state type, event handling, rendering,
//! and tests. Stateful components keep persistent state in `TuiState` and a
//! transient render wrapper built each frame; display-only components take
//! their data as props.

pub mod delete_modal;
pub mod item_form;
pub mod item_list;
pub mod item_view;
pub mod pagination_bar;
pub mod status_bar;

pub use delete_modal::DeleteModal;
pub use item_form::{FormEvent, ItemForm};
pub use item_list::{ItemList, ItemListState, ListEvent};
pub use item_view::ItemView;
pub use pagination_bar::PaginationBar;
pub use status_bar::StatusBar;
