//! Task List Core
//!
//! Task model, local persistence, progress and the render loop behind the
//! browser task list. Platform-independent: storage and rendering are
//! supplied through `KeyValueStorage` and `Renderer`.

pub mod config;
pub mod controller;
pub mod domain;
pub mod repository;
pub mod view;

pub use config::TaskListConfig;
pub use controller::{EditOutcome, InputController, SubmitOutcome, TaskList};
pub use domain::{Category, DomainError, ProgressSummary, Task, TaskId};
pub use repository::{KeyValueStorage, MemoryStorage, PersistenceAdapter, StorageError, TaskStore};
pub use view::{ListView, Renderer, TaskRow};
