use std::fmt;

use crate::api::ApiError;

/// Fallback messages shown when the server gives us nothing better.
/// These exact strings are part of the UI contract.
pub const CREATE_FAILED: &str = "Failed to add item. Please try again.";
pub const UPDATE_FAILED: &str = "Failed to update item. Please try again.";
pub const DELETE_FAILED: &str = "Failed to delete item. Please try again.";
pub const FETCH_ONE_FAILED: &str = "Failed to fetch item";
pub const FETCH_ALL_FAILED: &str = "Failed to fetch items";

/// Failures the store raises to user-initiated callers.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The server rejected a create/update because the name is taken.
    /// Carries the server's literal message so the UI can show it verbatim.
    DuplicateName(String),
    /// Any other create/update failure, with the fixed per-operation message.
    Failed(String),
    /// A fetch-by-id that did not produce a record.
    NotFound(String),
}

impl StoreError {
    /// The user-facing text for this failure.
    pub fn message(&self) -> &str {
        match self {
            StoreError::DuplicateName(msg)
            | StoreError::Failed(msg)
            | StoreError::NotFound(msg) => msg,
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for StoreError {}

/// Classifies a create/update failure.
///
/// The backend signals a duplicate name only through its error message text
/// containing "already exists"; there is no structured code. The substring
/// check is the observed contract, fragile as it is. Everything else becomes
/// the operation's fixed fallback message.
pub fn classify_mutation(err: ApiError, fallback: &str) -> StoreError {
    match err {
        ApiError::Http { message, .. } if message.contains("already exists") => {
            StoreError::DuplicateName(message)
        }
        _ => StoreError::Failed(fallback.to_string()),
    }
}
