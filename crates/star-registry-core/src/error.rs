//! Error types for the Star Registry Core.

use thiserror::Error;

/// Core errors that can occur while encoding, decoding or parsing.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("decoding error: {0}")]
    Decoding(String),

    #[error("malformed challenge: {0}")]
    MalformedChallenge(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
