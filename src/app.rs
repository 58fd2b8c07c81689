//! Task List Frontend App
//!
//! Builds the task list once at startup and provides it to the components.

use leptos::prelude::*;
use reactive_stores::Store;

use tasklist_core::{PersistenceAdapter, TaskList, TaskListConfig};

use crate::components::{NewTaskForm, ProgressBar, TaskListView};
use crate::context::AppContext;
use crate::storage::AppStorage;
use crate::store::{StoreRenderer, ViewState};

#[component]
pub fn App() -> impl IntoView {
    // Rendered state, written only by StoreRenderer
    let view_store = Store::new(ViewState::default());
    provide_context(view_store);

    let config = TaskListConfig::default();
    let adapter = PersistenceAdapter::new(AppStorage::open(), &config);
    let list = TaskList::open(adapter, StoreRenderer::new(view_store));
    provide_context(AppContext::new(StoredValue::new_local(list)));

    view! {
        <div class="container">
            <h1>"Task List"</h1>

            <NewTaskForm />

            <ProgressBar />

            <TaskListView />
        </div>
    }
}
