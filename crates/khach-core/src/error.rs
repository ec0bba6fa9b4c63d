//! Error types for the khach-core library.
//!
//! Line extraction itself never fails: a line either yields a record or a
//! diagnostic. These errors cover the collaborators around the engine.

use thiserror::Error;

/// Main error type for the khach library.
#[derive(Error, Debug)]
pub enum KhachError {
    /// Raw-text store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to persisting the raw input text.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read the stored text.
    #[error("failed to read {key}: {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the stored text.
    #[error("failed to write {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// No usable storage location.
    #[error("no data directory available")]
    NoDataDir,
}

/// Result type for the khach library.
pub type Result<T> = std::result::Result<T, KhachError>;
