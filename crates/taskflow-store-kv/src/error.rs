//! Error types for key-value store operations.

use thiserror::Error;

/// Errors that can occur while reading or writing the backing store.
#[derive(Error, Debug)]
pub enum KvStoreError {
    /// Failed to serialize the task sequence to JSON.
    #[error("Failed to serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),

    /// I/O operation on the backing file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend-specific failure that fits no other variant.
    #[error("Store error: {0}")]
    Other(String),
}
