//! Task List View Component
//!
//! Displays the rendered rows in collection order.

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::store::{use_view_store, ViewStateStoreFields};

#[component]
pub fn TaskListView() -> impl IntoView {
    let store = use_view_store();

    view! {
        <ul class="todo-list">
            <For
                each=move || store.rows().get()
                // Every displayed field is part of the key so any change rebuilds the row
                key=|row| (row.id, row.text.clone(), row.completed, row.editing)
                children=move |row| view! { <TaskItem row=row /> }
            />
        </ul>
    }
}
