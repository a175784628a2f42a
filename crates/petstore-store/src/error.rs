//! Error types for store operations.

use thiserror::Error;

/// Errors that can occur during pet store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The lock guarding the in-memory map was poisoned by a panic.
    #[error("store lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Convenience type alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
