//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::api::{ApiError, InventoryApi, Item, ItemDraft};
use crate::core::store::InventoryStore;

/// An in-memory stand-in for the backend: assigns ids, enforces unique
/// names, and can be told to fail its next call.
pub struct FakeApi {
    items: Mutex<Vec<Item>>,
    next_id: AtomicUsize,
    fail_next: Mutex<Option<ApiError>>,
}

impl FakeApi {
    pub fn seeded(items: Vec<Item>) -> Arc<Self> {
        Arc::new(Self {
            items: Mutex::new(items),
            next_id: AtomicUsize::new(1),
            fail_next: Mutex::new(None),
        })
    }

    /// Makes the next API call fail with `err` instead of reaching the
    /// in-memory state.
    pub fn fail_next(&self, err: ApiError) {
        *self.fail_next.lock().unwrap() = Some(err);
    }

    fn take_failure(&self) -> Option<ApiError> {
        self.fail_next.lock().unwrap().take()
    }
}

#[async_trait]
impl InventoryApi for FakeApi {
    async fn list(&self) -> Result<Vec<Item>, ApiError> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        Ok(self.items.lock().unwrap().clone())
    }

    async fn get(&self, id: &str) -> Result<Item, ApiError> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        self.items
            .lock()
            .unwrap()
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(ApiError::Http {
                status: 404,
                message: "Item not found".to_string(),
            })
    }

    async fn create(&self, draft: &ItemDraft) -> Result<Item, ApiError> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        let mut items = self.items.lock().unwrap();
        if items.iter().any(|item| item.name == draft.name) {
            return Err(ApiError::Http {
                status: 400,
                message: "Item with this name already exists".to_string(),
            });
        }
        let item = Item {
            id: format!("srv-{}", self.next_id.fetch_add(1, Ordering::Relaxed)),
            name: draft.name.clone(),
            quantity: draft.quantity,
            price: draft.price,
            category: draft.category.clone(),
            description: draft.description.clone(),
        };
        items.push(item.clone());
        Ok(item)
    }

    async fn update(&self, id: &str, draft: &ItemDraft) -> Result<Item, ApiError> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        let mut items = self.items.lock().unwrap();
        if items
            .iter()
            .any(|item| item.name == draft.name && item.id != id)
        {
            return Err(ApiError::Http {
                status: 400,
                message: "Item with this name already exists".to_string(),
            });
        }
        for item in items.iter_mut() {
            if item.id == id {
                item.name = draft.name.clone();
                item.quantity = draft.quantity;
                item.price = draft.price;
                item.category = draft.category.clone();
                item.description = draft.description.clone();
                return Ok(item.clone());
            }
        }
        Err(ApiError::Http {
            status: 404,
            message: "Item not found".to_string(),
        })
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Err(ApiError::Http {
                status: 404,
                message: "Item not found".to_string(),
            });
        }
        Ok(())
    }
}

/// A deterministic item for seeding test collections.
pub fn sample_item(n: usize) -> Item {
    Item {
        id: format!("item-{n}"),
        name: format!("Item {n}"),
        quantity: n as u32,
        price: n as f64 * 1.5,
        category: "Tools".to_string(),
        description: format!("Test item number {n}"),
    }
}

/// A valid draft with the given name.
pub fn sample_draft(name: &str) -> ItemDraft {
    ItemDraft {
        name: name.to_string(),
        quantity: 3,
        price: 9.99,
        category: "Tools".to_string(),
        description: "A test draft".to_string(),
    }
}

/// Creates a store backed by a seeded `FakeApi`.
pub fn test_store(items: Vec<Item>) -> InventoryStore {
    InventoryStore::new(FakeApi::seeded(items))
}
