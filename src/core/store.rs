//! # Inventory store
//!
//! The single shared collection of items for the session, mirrored from the
//! server. Everything that renders a list reads from here; nothing keeps a
//! private copy for mutation.
//!
//! Each operation is one transport call followed by one `apply_*` transition
//! on the collection, so a failure can never leave a partial replace behind.
//! Background operations (`list_all`, `delete`) report through the shared
//! `error` status; user-initiated ones (`get_one`, `create`, `update`) return
//! a `Result` the caller presents directly.
//!
//! Operations are not serialized against each other. Two updates racing on
//! the same id resolve last-write-wins by completion order; that is the
//! documented behavior, not an oversight.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::api::{ApiError, InventoryApi, Item, ItemDraft};
use crate::core::error::{
    self, StoreError, classify_mutation,
};

pub struct InventoryStore {
    api: Arc<dyn InventoryApi>,
    items: Vec<Item>,
    loading: bool,
    error: Option<String>,
}

impl InventoryStore {
    /// Starts in the loading state; the first `list_all` settles it, the way
    /// the list screen expects on startup.
    pub fn new(api: Arc<dyn InventoryApi>) -> Self {
        Self {
            api,
            items: Vec::new(),
            loading: true,
            error: None,
        }
    }

    /// The current collection, in the order the server last returned it.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The shared error status set by background operations.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// A handle to the transport, for callers that run the call in a
    /// background task and apply the result themselves.
    pub fn api(&self) -> Arc<dyn InventoryApi> {
        self.api.clone()
    }

    // ========================================================================
    // Operations (transport call + state transition)
    // ========================================================================

    /// Fetches the full collection and replaces the local one atomically.
    /// Failures are reported through the error status, not raised — this runs
    /// implicitly at startup with nobody positioned to catch.
    pub async fn list_all(&mut self) {
        self.begin_list();
        let result = self.api.list().await;
        self.apply_list(result);
    }

    /// Fetches one record without touching the collection. The caller decides
    /// what a failure means for the UI (typically: navigate away).
    pub async fn get_one(&self, id: &str) -> Result<Item, StoreError> {
        let result = self.api.get(id).await;
        Self::finish_get(id, result)
    }

    /// Creates an item. On success the server's canonical record (with its
    /// assigned id) is appended to the collection and returned. On failure
    /// the collection is untouched and the error is classified as a
    /// duplicate-name conflict or a generic failure.
    pub async fn create(&mut self, draft: &ItemDraft) -> Result<Item, StoreError> {
        let result = self.api.create(draft).await;
        self.apply_created(result)
    }

    /// Replaces the record at `id` with the server's canonical version of
    /// `draft`, preserving collection order. Same failure split as `create`.
    pub async fn update(&mut self, id: &str, draft: &ItemDraft) -> Result<Item, StoreError> {
        let result = self.api.update(id, draft).await;
        self.apply_updated(id, result)
    }

    /// Deletes on the server, then removes the matching record locally.
    /// Returns whether the delete went through; the human-readable failure
    /// goes to the shared error status.
    pub async fn delete(&mut self, id: &str) -> bool {
        let result = self.api.delete(id).await;
        self.apply_deleted(id, result)
    }

    // ========================================================================
    // State transitions
    // ========================================================================

    pub(crate) fn begin_list(&mut self) {
        self.loading = true;
    }

    pub(crate) fn apply_list(&mut self, result: Result<Vec<Item>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                debug!("collection replaced: {} items", items.len());
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                warn!("list fetch failed: {e}");
                self.error = Some(error::FETCH_ALL_FAILED.to_string());
            }
        }
    }

    pub(crate) fn finish_get(id: &str, result: Result<Item, ApiError>) -> Result<Item, StoreError> {
        result.map_err(|e| {
            warn!("fetch of item {id} failed: {e}");
            StoreError::NotFound(error::FETCH_ONE_FAILED.to_string())
        })
    }

    pub(crate) fn apply_created(
        &mut self,
        result: Result<Item, ApiError>,
    ) -> Result<Item, StoreError> {
        match result {
            Ok(item) => {
                info!("item created: {} ({})", item.name, item.id);
                self.items.push(item.clone());
                Ok(item)
            }
            Err(e) => {
                warn!("create failed: {e}");
                Err(classify_mutation(e, error::CREATE_FAILED))
            }
        }
    }

    pub(crate) fn apply_updated(
        &mut self,
        id: &str,
        result: Result<Item, ApiError>,
    ) -> Result<Item, StoreError> {
        match result {
            Ok(item) => {
                info!("item updated: {} ({id})", item.name);
                for existing in &mut self.items {
                    if existing.id == id {
                        *existing = item.clone();
                    }
                }
                Ok(item)
            }
            Err(e) => {
                warn!("update of {id} failed: {e}");
                Err(classify_mutation(e, error::UPDATE_FAILED))
            }
        }
    }

    pub(crate) fn apply_deleted(&mut self, id: &str, result: Result<(), ApiError>) -> bool {
        match result {
            Ok(()) => {
                info!("item deleted: {id}");
                self.items.retain(|item| item.id != id);
                self.error = None;
                true
            }
            Err(e) => {
                warn!("delete of {id} failed: {e}");
                self.error = Some(error::DELETE_FAILED.to_string());
                false
            }
        }
    }
}
