//! # Core Application Logic
//!
//! The inventory domain, independent of any UI technology. The TUI adapter
//! consumes it; a different front end could replace the TUI without touching
//! anything here.
//!
//! ## Modules
//!
//! - [`store`]: the shared item collection and its five operations
//! - [`workflow`]: pagination + the delete confirmation state machine
//! - [`pagination`]: pure page math (size 6, 1-indexed, clamped)
//! - [`error`]: failure taxonomy and conflict classification
//! - [`config`]: settings file + resolution hierarchy

pub mod config;
pub mod error;
pub mod pagination;
pub mod store;
pub mod workflow;
