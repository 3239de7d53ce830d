//! Error types for the registry.

use star_registry_core::CoreError;
use star_registry_store::StoreError;
use thiserror::Error;

/// Errors that can occur during registry operations.
///
/// Lookups that find nothing return `Ok(None)`; chain validation failures are
/// returned as data. Only rejected submissions and infrastructure faults
/// surface here.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The challenge was issued longer ago than the allowed window.
    #[error("challenge is {elapsed}s old, window is {window}s")]
    TimeWindowExceeded { elapsed: i64, window: i64 },

    /// The signature does not authenticate the address over the message.
    #[error("signature verification failed for {address}")]
    SignatureInvalid { address: String },

    /// The challenge message could not be parsed or carries a foreign tag.
    #[error("malformed challenge: {0}")]
    MalformedChallenge(String),

    /// A block could not be placed at the tip.
    #[error("append conflict: expected height {expected_height}")]
    Conflict { expected_height: u64 },

    /// Encoding or decoding error.
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Storage error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl RegistryError {
    /// Check if the caller can fix the request and retry.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            RegistryError::TimeWindowExceeded { .. }
                | RegistryError::SignatureInvalid { .. }
                | RegistryError::MalformedChallenge(_)
        )
    }
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
