//! Persistence Adapter
//!
//! Serializes the whole task collection as one JSON array under a single key.

use crate::config::TaskListConfig;
use crate::domain::{retain_unique, Task};

use super::traits::{KeyValueStorage, StorageError, StorageResult};

pub struct PersistenceAdapter<S: KeyValueStorage> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> PersistenceAdapter<S> {
    pub fn new(storage: S, config: &TaskListConfig) -> Self {
        Self {
            storage,
            key: config.storage_key.clone(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Strict load: absent blob is an empty list, malformed blob is an error.
    /// Duplicate ids are dropped, keeping the first occurrence.
    pub fn try_load(&self) -> StorageResult<Vec<Task>> {
        let Some(blob) = self.storage.get_item(&self.key)? else {
            return Ok(Vec::new());
        };
        let mut tasks: Vec<Task> = serde_json::from_str(&blob)?;
        let dropped = retain_unique(&mut tasks);
        if !dropped.is_empty() {
            tracing::warn!(key = %self.key, ?dropped, "dropped tasks with duplicate ids");
        }
        Ok(tasks)
    }

    /// Load that fails closed: any storage or parse failure yields an empty list.
    /// The stored blob is left as is until the next save overwrites it.
    pub fn load(&self) -> Vec<Task> {
        match self.try_load() {
            Ok(tasks) => {
                tracing::debug!(key = %self.key, count = tasks.len(), "loaded tasks");
                tasks
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "could not load tasks, starting empty");
                Vec::new()
            }
        }
    }

    /// Overwrite the stored blob with the full collection
    pub fn save(&mut self, tasks: &[Task]) -> StorageResult<()> {
        let blob = serde_json::to_string(tasks).map_err(|e| StorageError::Encode(e.to_string()))?;
        self.storage.set_item(&self.key, &blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, TaskId};
    use crate::repository::MemoryStorage;

    fn adapter(storage: MemoryStorage) -> PersistenceAdapter<MemoryStorage> {
        PersistenceAdapter::new(storage, &TaskListConfig::default())
    }

    #[test]
    fn test_absent_blob_loads_empty() {
        let adapter = adapter(MemoryStorage::new());
        assert!(adapter.try_load().unwrap().is_empty());
        assert!(adapter.load().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let mut adapter = adapter(MemoryStorage::new());
        let mut done = Task::new(TaskId(2), "Write report", Category::Work);
        done.completed = true;
        let tasks = vec![Task::new(TaskId(1), "Buy milk", Category::Personal), done];

        adapter.save(&tasks).unwrap();
        assert_eq!(adapter.load(), tasks);
        assert_eq!(adapter.storage().writes(), 1);
    }

    #[test]
    fn test_reads_blob_in_stored_format() {
        let blob = r#"[{"id":1700000000001,"text":"Read","category":"study","completed":true}]"#;
        let adapter = adapter(MemoryStorage::with_item("todos", blob));
        let tasks = adapter.load();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, TaskId(1700000000001));
        assert_eq!(tasks[0].category, Category::Study);
        assert!(tasks[0].completed);
    }

    #[test]
    fn test_malformed_blob_fails_closed() {
        let adapter = adapter(MemoryStorage::with_item("todos", "{not json"));
        assert!(matches!(adapter.try_load(), Err(StorageError::Corrupt(_))));
        assert!(adapter.load().is_empty());
        assert_eq!(adapter.storage().raw("todos"), Some("{not json"));
    }

    #[test]
    fn test_unknown_category_is_malformed() {
        let blob = r#"[{"id":1,"text":"Mow","category":"chores","completed":false}]"#;
        let adapter = adapter(MemoryStorage::with_item("todos", blob));
        assert!(adapter.try_load().is_err());
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let blob = r#"[
            {"id":1,"text":"first","category":"work","completed":false},
            {"id":1,"text":"second","category":"work","completed":true},
            {"id":2,"text":"third","category":"study","completed":false}
        ]"#;
        let tasks = adapter(MemoryStorage::with_item("todos", blob)).load();
        let texts: Vec<_> = tasks.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["first", "third"]);
    }

    #[test]
    fn test_write_failure_is_reported() {
        let mut storage = MemoryStorage::new();
        storage.set_read_only(true);
        let mut adapter = adapter(storage);
        assert!(matches!(adapter.save(&[]), Err(StorageError::Write(_))));
    }
}
