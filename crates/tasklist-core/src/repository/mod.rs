//! Repository Layer
//!
//! Storage abstraction, the persistence adapter and the task store.

mod traits;
mod memory;
mod persistence;
mod task_store;


pub use traits::{KeyValueStorage, StorageError, StorageResult};
pub use memory::MemoryStorage;
pub use persistence::PersistenceAdapter;
pub use task_store::TaskStore;
