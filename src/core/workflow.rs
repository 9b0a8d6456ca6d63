//! # List workflow
//!
//! The state machine behind the list screen: which page is showing, and the
//! select → confirm → commit two-step for deletions. It never copies item
//! data; the visible slice is derived from the store's current collection on
//! every render.

use log::debug;

use crate::api::Item;
use crate::core::pagination::{self, clamp_page, page_slice, total_pages};
use crate::core::store::InventoryStore;

/// What the list is doing right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMode {
    Idle,
    /// A delete intent is pending confirmation. Nothing has been sent to the
    /// server yet; cancel returns to `Idle` with no effect.
    ConfirmingDelete { target_id: String },
}

/// How a confirmed delete ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Failed(String),
}

pub struct ListWorkflow {
    page: usize,
    mode: ListMode,
}

impl Default for ListWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

impl ListWorkflow {
    pub fn new() -> Self {
        Self {
            page: 1,
            mode: ListMode::Idle,
        }
    }

    /// The current 1-indexed page.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn mode(&self) -> &ListMode {
        &self.mode
    }

    /// The id awaiting confirmation, if any.
    pub fn confirming_target(&self) -> Option<&str> {
        match &self.mode {
            ListMode::ConfirmingDelete { target_id } => Some(target_id),
            ListMode::Idle => None,
        }
    }

    /// The slice of the collection visible on the current page, recomputed
    /// from whatever the store holds right now.
    pub fn visible_page<'a>(&self, items: &'a [Item]) -> &'a [Item] {
        page_slice(items, self.page)
    }

    /// Moves to the next page; a no-op at the last page.
    pub fn next_page(&mut self, item_count: usize) {
        if self.page < total_pages(item_count) {
            self.page += 1;
        }
    }

    /// Moves to the previous page; a no-op at page 1.
    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Jumps to `page`, clamped to the valid range for `item_count`.
    pub fn go_to_page(&mut self, page: usize, item_count: usize) {
        self.page = clamp_page(page, item_count);
    }

    /// Registers a delete intent for `id`. Does not touch the collection.
    pub fn request_delete(&mut self, id: &str) {
        debug!("delete requested for {id}");
        self.mode = ListMode::ConfirmingDelete {
            target_id: id.to_string(),
        };
    }

    /// Abandons a pending delete with no effect.
    pub fn cancel_delete(&mut self) {
        self.mode = ListMode::Idle;
    }

    /// Commits the pending delete through the store. Returns `None` when no
    /// delete was pending. On success the page clamps to the new last valid
    /// page (deleting the only item on the last page steps back one page);
    /// on failure the page and collection are unchanged and the store's
    /// error status is surfaced.
    pub async fn confirm_delete(&mut self, store: &mut InventoryStore) -> Option<DeleteOutcome> {
        let target_id = self.take_target()?;
        let deleted = store.delete(&target_id).await;
        Some(self.settle_delete(deleted, store))
    }

    /// Takes the pending target out, returning the workflow to `Idle`.
    /// Split out so callers running the transport call in a background task
    /// can use the same transition.
    pub(crate) fn take_target(&mut self) -> Option<String> {
        match std::mem::replace(&mut self.mode, ListMode::Idle) {
            ListMode::ConfirmingDelete { target_id } => Some(target_id),
            ListMode::Idle => None,
        }
    }

    /// Settles pagination after a delete attempt has been applied to the
    /// store. Counterpart of `take_target` for the background-task path.
    pub(crate) fn settle_delete(
        &mut self,
        deleted: bool,
        store: &InventoryStore,
    ) -> DeleteOutcome {
        if deleted {
            self.page = clamp_page(self.page, store.items().len());
            DeleteOutcome::Deleted
        } else {
            DeleteOutcome::Failed(
                store
                    .error()
                    .unwrap_or(crate::core::error::DELETE_FAILED)
                    .to_string(),
            )
        }
    }

    /// "Page X of Y" numbers for the pagination bar.
    pub fn page_numbers(&self, item_count: usize) -> (usize, usize) {
        (
            clamp_page(self.page, item_count),
            pagination::total_pages(item_count),
        )
    }
}
