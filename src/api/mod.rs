//! # Inventory API
//!
//! The transport boundary. `InventoryApi` is the seam between the store and
//! the network: the real implementation is [`ApiClient`] (reqwest), and tests
//! substitute an in-memory fake. The store only ever sees the trait.

pub mod client;
pub mod types;

use async_trait::async_trait;

pub use client::{ApiClient, ApiError};
pub use types::{Item, ItemDraft};

/// The five operations the backend exposes under `/items`.
#[async_trait]
pub trait InventoryApi: Send + Sync {
    /// `GET /items` — the full collection.
    async fn list(&self) -> Result<Vec<Item>, ApiError>;

    /// `GET /items/{id}` — a single record.
    async fn get(&self, id: &str) -> Result<Item, ApiError>;

    /// `POST /items` — create; the server assigns the id and returns the
    /// canonical record.
    async fn create(&self, draft: &ItemDraft) -> Result<Item, ApiError>;

    /// `PUT /items/{id}` — full replacement; returns the canonical record.
    async fn update(&self, id: &str, draft: &ItemDraft) -> Result<Item, ApiError>;

    /// `DELETE /items/{id}` — ack only.
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}
