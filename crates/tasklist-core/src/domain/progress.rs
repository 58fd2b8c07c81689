//! Progress Summary
//!
//! Completion metrics derived from the task collection. Never stored.

use serde::{Deserialize, Serialize};

use super::task::Task;

/// Completed/total/percent over a task collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub completed: usize,
    pub total: usize,
    /// 0..=100, rounded half up
    pub percent: u32,
}

impl ProgressSummary {
    pub fn compute(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|task| task.completed).count();
        Self::from_counts(completed, total)
    }

    pub fn from_counts(completed: usize, total: usize) -> Self {
        let percent = if total == 0 {
            0
        } else {
            // floor(x + 0.5) in integers: (200c + t) / 2t
            ((200 * completed as u64 + total as u64) / (2 * total as u64)) as u32
        };
        Self { completed, total, percent }
    }

    /// Text shown next to the bar, e.g. "1 / 2 done"
    pub fn readout(&self) -> String {
        format!("{} / {} done", self.completed, self.total)
    }

    /// CSS width of the proportional fill
    pub fn fill_width(&self) -> String {
        format!("{}%", self.percent)
    }
}
