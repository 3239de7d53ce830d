//! Error types for the store module.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A writer panicked while holding the block lock.
    #[error("block lock poisoned")]
    LockPoisoned,
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
