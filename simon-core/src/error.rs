//! Error types for the Simon engine.
//!
//! The gameplay surface itself is infallible — a wrong press is a normal
//! [`Outcome::GameOver`](crate::Outcome::GameOver), not an error. These
//! variants cover the edges: the persistence port, serialization of the
//! high-score blob, and configuration loading.

use thiserror::Error;

/// Top-level error type for Simon engine operations.
#[derive(Error, Debug)]
pub enum SimonError {
    /// The score store failed to read or write its key-value entry.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Encoding or decoding the high-score table failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, SimonError>;
