//! Application Context
//!
//! The task list, shared with every component via the Leptos Context API.

use leptos::prelude::*;

use tasklist_core::{Category, SubmitOutcome, TaskId, TaskList};

use crate::storage::AppStorage;
use crate::store::StoreRenderer;

/// Browser storage is not thread-safe, so the list lives in local storage
pub type SharedTaskList = StoredValue<TaskList<AppStorage, StoreRenderer>, LocalStorage>;

/// Interaction entry points provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    list: SharedTaskList,
}

impl AppContext {
    pub fn new(list: SharedTaskList) -> Self {
        Self { list }
    }

    /// Submit the new-task form. True when a task was created and the form
    /// should clear and refocus.
    pub fn submit(&self, text: &str, category: Category) -> bool {
        self.list
            .try_update_value(|list| matches!(list.submit(text, category), SubmitOutcome::Created(_)))
            .unwrap_or(false)
    }

    pub fn toggle(&self, id: TaskId) {
        self.list.update_value(|list| {
            list.toggle(id);
        });
    }

    pub fn delete(&self, id: TaskId) {
        self.list.update_value(|list| {
            list.delete(id);
        });
    }

    pub fn begin_edit(&self, id: TaskId) {
        self.list.update_value(|list| {
            list.begin_edit(id);
        });
    }

    pub fn confirm_edit(&self, id: TaskId, text: &str) {
        self.list.update_value(|list| {
            list.confirm_edit(id, text);
        });
    }

    pub fn blur_edit(&self, id: TaskId, text: &str) {
        self.list.update_value(|list| {
            list.blur_edit(id, text);
        });
    }

    pub fn cancel_edit(&self, id: TaskId) {
        self.list.update_value(|list| {
            list.cancel_edit(id);
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
