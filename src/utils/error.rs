//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while loading a profiling results file
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read profile: {0}")]
    Io(#[from] std::io::Error),

    /// The refused protocol; kept apart so callers can match on it
    #[error("unsupported pickle protocol: {0}")]
    UnsupportedProtocol(u8),

    /// Any other protocol newer than the loader reads
    #[error("Failed to decode profile: unsupported pickle protocol: {0}")]
    UnknownProtocol(u8),

    #[error("Failed to decode profile: {0}")]
    Decode(#[from] serde_pickle::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
