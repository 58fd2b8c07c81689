//! Task Entity
//!
//! Represents one user-entered to-do item.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::entity::Entity;

/// Task identifier, stored as a plain JSON number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, never changes after creation
    pub id: TaskId,
    /// Trimmed, never empty
    pub text: String,
    /// Chosen at creation
    pub category: Category,
    /// Completion status
    pub completed: bool,
}

impl Task {
    /// Create a new, not yet completed task
    pub fn new(id: TaskId, text: impl Into<String>, category: Category) -> Self {
        Self {
            id,
            text: text.into(),
            category,
            completed: false,
        }
    }
}

impl Entity for Task {
    type Id = TaskId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Issues task ids from the wall clock (milliseconds since the epoch).
///
/// Ids are strictly increasing per generator: when the clock has not moved
/// past the last issued id, the next id is `last + 1`.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
    fixed_clock: Option<u64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator whose clock never moves, so every id after the first is a bump
    pub fn with_fixed_clock(now_millis: u64) -> Self {
        Self {
            last: 0,
            fixed_clock: Some(now_millis),
        }
    }

    /// Make sure future ids are greater than `id`
    pub fn observe(&mut self, id: TaskId) {
        self.last = self.last.max(id.0);
    }

    /// Next id based on the current time, `None` once ids are exhausted
    pub fn next_id(&mut self) -> Option<TaskId> {
        let now = match self.fixed_clock {
            Some(millis) => millis,
            None => chrono::Utc::now().timestamp_millis().max(0) as u64,
        };
        self.next_at(now)
    }

    /// Next id given a clock reading in milliseconds, `None` when the last
    /// issued id is already `u64::MAX`
    pub fn next_at(&mut self, now_millis: u64) -> Option<TaskId> {
        let id = if now_millis > self.last { now_millis } else { self.last.checked_add(1)? };
        self.last = id;
        Some(TaskId(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let task = Task::new(TaskId(7), "Buy milk", Category::Personal);
        assert_eq!(task.id(), TaskId(7));
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn test_storage_shape() {
        let task = Task::new(TaskId(1700000000000), "Write report", Category::Work);
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(
            json,
            r#"{"id":1700000000000,"text":"Write report","category":"work","completed":false}"#
        );
    }

    #[test]
    fn test_ids_follow_clock() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_at(1_000), Some(TaskId(1_000)));
        assert_eq!(ids.next_at(2_500), Some(TaskId(2_500)));
    }

    #[test]
    fn test_ids_bump_when_clock_stalls_or_goes_back() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_at(1_000), Some(TaskId(1_000)));
        assert_eq!(ids.next_at(1_000), Some(TaskId(1_001)));
        assert_eq!(ids.next_at(900), Some(TaskId(1_002)));
    }

    #[test]
    fn test_fixed_clock() {
        let mut ids = IdGenerator::with_fixed_clock(42);
        assert_eq!(ids.next_id(), Some(TaskId(42)));
        assert_eq!(ids.next_id(), Some(TaskId(43)));
    }

    #[test]
    fn test_observed_ids_are_skipped() {
        let mut ids = IdGenerator::new();
        ids.observe(TaskId(5_000));
        ids.observe(TaskId(10));
        assert_eq!(ids.next_at(4_000), Some(TaskId(5_001)));
        assert!(ids.next_id() > Some(TaskId(5_001)));
    }

    #[test]
    fn test_exhausted_ids_do_not_wrap() {
        let mut ids = IdGenerator::with_fixed_clock(0);
        ids.observe(TaskId(u64::MAX));
        assert_eq!(ids.next_id(), None);
        assert_eq!(ids.next_at(5), None);
    }
}
