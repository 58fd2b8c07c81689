//! Task Store
//!
//! Owns the ordered task collection. Every successful mutation rewrites the
//! persisted blob; rejected or missing-target operations touch nothing.

use crate::domain::{Category, IdGenerator, ProgressSummary, Task, TaskId};

use super::persistence::PersistenceAdapter;
use super::traits::KeyValueStorage;

pub struct TaskStore<S: KeyValueStorage> {
    tasks: Vec<Task>,
    adapter: PersistenceAdapter<S>,
    ids: IdGenerator,
}

impl<S: KeyValueStorage> TaskStore<S> {
    /// Hydrate from storage (empty when nothing usable is stored)
    pub fn open(adapter: PersistenceAdapter<S>) -> Self {
        let tasks = adapter.load();
        let mut ids = IdGenerator::new();
        for task in &tasks {
            ids.observe(task.id);
        }
        Self { tasks, adapter, ids }
    }

    /// Replace the id source, e.g. with one driven by a fixed clock
    pub fn with_id_generator(mut self, mut ids: IdGenerator) -> Self {
        for task in &self.tasks {
            ids.observe(task.id);
        }
        self.ids = ids;
        self
    }

    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn progress(&self) -> ProgressSummary {
        ProgressSummary::compute(&self.tasks)
    }

    pub fn adapter(&self) -> &PersistenceAdapter<S> {
        &self.adapter
    }

    /// Append a task with trimmed text. Blank text creates nothing.
    pub fn create(&mut self, text: &str, category: Category) -> Option<Task> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let task = Task::new(self.fresh_id(), text, category);
        tracing::debug!(id = %task.id, %category, "created task");
        self.tasks.push(task.clone());
        self.persist();
        Some(task)
    }

    /// Remove the task with `id`, if present
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        let removed = self.tasks.remove(index);
        tracing::debug!(%id, "deleted task");
        self.persist();
        Some(removed)
    }

    /// Flip completion; returns the new state, `None` if `id` is absent
    pub fn toggle(&mut self, id: TaskId) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        task.completed = !task.completed;
        let completed = task.completed;
        tracing::debug!(%id, completed, "toggled task");
        self.persist();
        Some(completed)
    }

    /// Replace the text with the trimmed `new_text`. Returns false (and leaves
    /// the task as it was) when the text is blank or `id` is absent.
    pub fn update(&mut self, id: TaskId, new_text: &str) -> bool {
        let new_text = new_text.trim();
        if new_text.is_empty() {
            return false;
        }
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };
        task.text = new_text.to_string();
        tracing::debug!(%id, "updated task text");
        self.persist();
        true
    }

    /// Clock-based id when it is free, otherwise the smallest unused id
    fn fresh_id(&mut self) -> TaskId {
        match self.ids.next_id() {
            Some(id) if self.get(id).is_none() => id,
            candidate => {
                let mut used: Vec<u64> = self.tasks.iter().map(|task| task.id.0).collect();
                used.sort_unstable();
                let mut free = 0u64;
                for id in used {
                    if id != free {
                        break;
                    }
                    free += 1;
                }
                tracing::warn!(?candidate, id = free, "id source unusable, reusing a free id");
                TaskId(free)
            }
        }
    }

    fn persist(&mut self) {
        if let Err(e) = self.adapter.save(&self.tasks) {
            tracing::warn!(key = %self.adapter.key(), error = %e, "failed to persist tasks");
        }
    }
}
