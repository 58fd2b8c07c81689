//! Rendered View State
//!
//! Uses Leptos reactive_stores so rows and progress update independently.

use leptos::prelude::*;
use reactive_stores::Store;

use tasklist_core::{ListView, ProgressSummary, Renderer, TaskRow};

/// What the list and progress bar currently show
#[derive(Clone, Debug, Default, Store)]
pub struct ViewState {
    /// Rows in collection order
    pub rows: Vec<TaskRow>,
    pub progress: ProgressSummary,
}

/// Type alias for the store
pub type ViewStore = Store<ViewState>;

/// Get the view store from context
pub fn use_view_store() -> ViewStore {
    expect_context::<ViewStore>()
}

/// Renderer that publishes each view into the reactive store
pub struct StoreRenderer {
    store: ViewStore,
}

impl StoreRenderer {
    pub fn new(store: ViewStore) -> Self {
        Self { store }
    }
}

impl Renderer for StoreRenderer {
    fn render(&mut self, view: ListView) {
        tracing::trace!(rows = view.rows.len(), percent = view.progress.percent, "render");
        self.store.rows().set(view.rows);
        self.store.progress().set(view.progress);
    }
}
