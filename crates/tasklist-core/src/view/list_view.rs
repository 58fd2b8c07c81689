use crate::domain::{Category, ProgressSummary, Task, TaskId};

/// One rendered list row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    pub text: String,
    pub category: Category,
    pub category_label: &'static str,
    pub completed: bool,
    /// Row shows the inline edit field instead of the text
    pub editing: bool,
}

impl TaskRow {
    /// CSS classes of the row element
    pub fn class(&self) -> String {
        let mut class = format!("todo-item category-{}", self.category.as_str());
        if self.completed {
            class.push_str(" completed");
        }
        if self.editing {
            class.push_str(" editing");
        }
        class
    }

    /// CSS classes of the category badge
    pub fn badge_class(&self) -> String {
        format!("category-badge badge-{}", self.category.as_str())
    }
}

/// Everything the list and the progress bar display
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListView {
    pub rows: Vec<TaskRow>,
    pub progress: ProgressSummary,
}

impl ListView {
    /// Full rebuild, rows in collection order
    pub fn build(tasks: &[Task], editing: Option<TaskId>) -> Self {
        let rows = tasks
            .iter()
            .map(|task| TaskRow {
                id: task.id,
                text: task.text.clone(),
                category: task.category,
                category_label: task.category.label(),
                completed: task.completed,
                editing: editing == Some(task.id),
            })
            .collect();
        Self {
            rows,
            progress: ProgressSummary::compute(tasks),
        }
    }

    pub fn editing(&self) -> Option<TaskId> {
        self.rows.iter().find(|row| row.editing).map(|row| row.id)
    }
}
