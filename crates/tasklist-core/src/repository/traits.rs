//! Repository Layer - Core Traits
//!
//! Durable storage is an opaque key-value string store.
//! Implementations can use browser localStorage, in-memory maps, etc.

/// Common result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-level errors
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Storage write failed: {0}")]
    Write(String),
    #[error("Stored task list is malformed: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("Failed to encode task list: {0}")]
    Encode(String),
}

/// Minimal synchronous key-value string store
pub trait KeyValueStorage {
    /// Read the value stored under `key`, `None` when absent
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrite the value stored under `key`
    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()>;
}
