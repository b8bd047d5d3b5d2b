//! # Store Errors
//!
//! Errors raised by the store actor and its client.

/// Errors that can occur within the store itself.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Rejected: {0}")]
    Rejected(String),
}
