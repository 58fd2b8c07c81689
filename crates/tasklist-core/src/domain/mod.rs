//! Domain Layer
//!
//! Task entities and the values derived from them.
//! This layer has NO storage or UI dependencies (except serde for serialization).

mod entity;
mod category;
mod task;
mod progress;

pub use entity::{Entity, DomainError, DomainResult, retain_unique};
pub use category::{Category, CATEGORY_LABELS};
pub use task::{Task, TaskId, IdGenerator};
pub use progress::ProgressSummary;
