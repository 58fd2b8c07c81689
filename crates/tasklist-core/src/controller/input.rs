//! Input Controller
//!
//! New-task submission and the inline edit lifecycle.
//! At most one task is in edit mode at a time.

use crate::domain::{Category, Task, TaskId};
use crate::repository::{KeyValueStorage, TaskStore};

/// Result of submitting the new-task form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Task was added; the form should clear its text and refocus
    Created(Task),
    /// Blank text; the form keeps its contents
    Rejected,
}

/// Result of leaving edit mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// New text stored
    Saved,
    /// Blank text or vanished task, previous text kept
    Unchanged,
    /// Edit abandoned
    Cancelled,
    /// Event for a task that is not being edited; ignored
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct InputController {
    editing: Option<TaskId>,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Task currently in edit mode
    pub fn editing(&self) -> Option<TaskId> {
        self.editing
    }

    pub fn submit<S: KeyValueStorage>(
        &self,
        store: &mut TaskStore<S>,
        text: &str,
        category: Category,
    ) -> SubmitOutcome {
        match store.create(text, category) {
            Some(task) => SubmitOutcome::Created(task),
            None => SubmitOutcome::Rejected,
        }
    }

    /// Enter edit mode for `id`. Any other in-progress edit is dropped
    /// without saving. Returns false when `id` is not in the store.
    pub fn begin_edit<S: KeyValueStorage>(&mut self, store: &TaskStore<S>, id: TaskId) -> bool {
        if store.get(id).is_none() {
            return false;
        }
        if let Some(previous) = self.editing.replace(id) {
            if previous != id {
                tracing::debug!(%previous, %id, "switched edit target, previous edit discarded");
            }
        }
        true
    }

    /// Enter key in the edit field
    pub fn confirm_edit<S: KeyValueStorage>(
        &mut self,
        store: &mut TaskStore<S>,
        id: TaskId,
        text: &str,
    ) -> EditOutcome {
        if self.editing != Some(id) {
            return EditOutcome::Stale;
        }
        self.editing = None;
        if store.update(id, text) {
            EditOutcome::Saved
        } else {
            EditOutcome::Unchanged
        }
    }

    /// Focus left the edit field: commits exactly like `confirm_edit`
    pub fn blur_edit<S: KeyValueStorage>(
        &mut self,
        store: &mut TaskStore<S>,
        id: TaskId,
        text: &str,
    ) -> EditOutcome {
        self.confirm_edit(store, id, text)
    }

    /// Escape key in the edit field
    pub fn cancel_edit(&mut self, id: TaskId) -> EditOutcome {
        if self.editing != Some(id) {
            return EditOutcome::Stale;
        }
        self.editing = None;
        EditOutcome::Cancelled
    }

    /// Leave edit mode if the edited task no longer exists
    pub(crate) fn forget(&mut self, id: TaskId) {
        if self.editing == Some(id) {
            self.editing = None;
        }
    }
}
