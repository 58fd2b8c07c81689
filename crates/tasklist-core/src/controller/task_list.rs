//! Task List Coordinator
//!
//! Owns the store, the input controller and the renderer. Every interaction
//! goes through here and ends with a full re-render when anything visible
//! may have changed.

use crate::domain::{Category, ProgressSummary, Task, TaskId};
use crate::repository::{KeyValueStorage, PersistenceAdapter, TaskStore};
use crate::view::{ListView, Renderer};

use super::input::{EditOutcome, InputController, SubmitOutcome};

pub struct TaskList<S: KeyValueStorage, R: Renderer> {
    store: TaskStore<S>,
    input: InputController,
    renderer: R,
}

impl<S: KeyValueStorage, R: Renderer> TaskList<S, R> {
    /// Load persisted tasks and render once
    pub fn open(adapter: PersistenceAdapter<S>, renderer: R) -> Self {
        Self::with_store(TaskStore::open(adapter), renderer)
    }

    pub fn with_store(store: TaskStore<S>, renderer: R) -> Self {
        let mut list = Self {
            store,
            input: InputController::new(),
            renderer,
        };
        tracing::info!(count = list.store.len(), "task list ready");
        list.render();
        list
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.list()
    }

    pub fn progress(&self) -> ProgressSummary {
        self.store.progress()
    }

    pub fn editing(&self) -> Option<TaskId> {
        self.input.editing()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn submit(&mut self, text: &str, category: Category) -> SubmitOutcome {
        let outcome = self.input.submit(&mut self.store, text, category);
        if matches!(outcome, SubmitOutcome::Created(_)) {
            self.render();
        }
        outcome
    }

    pub fn toggle(&mut self, id: TaskId) -> Option<bool> {
        let completed = self.store.toggle(id)?;
        self.render();
        Some(completed)
    }

    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let removed = self.store.delete(id)?;
        self.input.forget(id);
        self.render();
        Some(removed)
    }

    pub fn begin_edit(&mut self, id: TaskId) -> bool {
        let started = self.input.begin_edit(&self.store, id);
        if started {
            self.render();
        }
        started
    }

    pub fn confirm_edit(&mut self, id: TaskId, text: &str) -> EditOutcome {
        let outcome = self.input.confirm_edit(&mut self.store, id, text);
        self.render_after_edit(outcome)
    }

    pub fn blur_edit(&mut self, id: TaskId, text: &str) -> EditOutcome {
        let outcome = self.input.blur_edit(&mut self.store, id, text);
        self.render_after_edit(outcome)
    }

    pub fn cancel_edit(&mut self, id: TaskId) -> EditOutcome {
        let outcome = self.input.cancel_edit(id);
        self.render_after_edit(outcome)
    }

    fn render_after_edit(&mut self, outcome: EditOutcome) -> EditOutcome {
        if outcome != EditOutcome::Stale {
            self.render();
        }
        outcome
    }

    fn render(&mut self) {
        let view = ListView::build(self.store.list(), self.input.editing());
        self.renderer.render(view);
    }
}
