//! Error types for the Falcata library.
//!
//! All failures are represented by the [`FalcataError`] enum. Failures are
//! local and non-retryable: a failed load or build aborts the operation for
//! the caller to handle.

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Falcata operations.
#[derive(Error, Debug)]
pub enum FalcataError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed persisted trie file.
    #[error("Format error: {0}")]
    Format(String),

    /// Out-of-range node index or parent lookup on the root.
    #[error("Index error: {0}")]
    Index(String),

    /// A value does not fit its packed on-disk field.
    #[error("Encoding overflow: {0}")]
    EncodingOverflow(String),

    /// Invalid argument supplied by the caller.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with FalcataError.
pub type Result<T> = std::result::Result<T, FalcataError>;

impl FalcataError {
    /// Create a new format error.
    pub fn format<S: Into<String>>(msg: S) -> Self {
        FalcataError::Format(msg.into())
    }

    /// Create a new index error.
    pub fn index<S: Into<String>>(msg: S) -> Self {
        FalcataError::Index(msg.into())
    }

    /// Create a new encoding overflow error.
    pub fn encoding_overflow<S: Into<String>>(msg: S) -> Self {
        FalcataError::EncodingOverflow(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        FalcataError::InvalidArgument(msg.into())
    }
}
