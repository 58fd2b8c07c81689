//! Browser Storage
//!
//! `localStorage` behind the core's key-value trait, with an in-memory
//! fallback when the browser refuses access (e.g. storage disabled).

use tasklist_core::repository::StorageResult;
use tasklist_core::{KeyValueStorage, MemoryStorage, StorageError};

pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> StorageResult<Self> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// Storage backend chosen at startup
pub enum AppStorage {
    Browser(BrowserStorage),
    Memory(MemoryStorage),
}

impl AppStorage {
    pub fn open() -> Self {
        match BrowserStorage::open() {
            Ok(storage) => AppStorage::Browser(storage),
            Err(e) => {
                tracing::warn!(error = %e, "localStorage unavailable, tasks will not survive a reload");
                AppStorage::Memory(MemoryStorage::new())
            }
        }
    }
}

impl KeyValueStorage for AppStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        match self {
            AppStorage::Browser(storage) => storage.get_item(key),
            AppStorage::Memory(storage) => storage.get_item(key),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        match self {
            AppStorage::Browser(storage) => storage.set_item(key, value),
            AppStorage::Memory(storage) => storage.set_item(key, value),
        }
    }
}
