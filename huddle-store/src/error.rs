//! Error types for the storage layer.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
///
/// Lookup misses are `Option`s, not errors; only mutations of an absent
/// record fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record with this id exists in the store.
    #[error("record not found: {0}")]
    NotFound(String),
}
