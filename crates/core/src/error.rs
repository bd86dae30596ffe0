//! Error types for chatdigest core functionality.

use thiserror::Error;

/// Main error type for chatdigest.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Transcript ingestion error.
    #[error("Ingest error: {0}")]
    Ingest(String),
    /// Data parsing error.
    #[error("Data parsing error: {0}")]
    Parse(String),
    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),
    /// Custom error with message.
    #[error("{0}")]
    Custom(String),
}

/// Result type for chatdigest operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an ingestion error
    pub fn ingest(msg: impl Into<String>) -> Self {
        Self::Ingest(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a custom error
    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }
}
