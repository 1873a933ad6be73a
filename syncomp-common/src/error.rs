//! Common error types for SynesthesiaComposer

use thiserror::Error;

/// Common result type for SynesthesiaComposer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across SynesthesiaComposer crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input violates a precondition of the mapping engine
    /// (malformed hex color, slider out of range, empty image statistics)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Shorthand for building an [`Error::InvalidInput`]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}
