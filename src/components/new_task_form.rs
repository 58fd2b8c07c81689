//! New Task Form Component
//!
//! Text input and category selector for creating tasks.

use leptos::html::Input;
use leptos::prelude::*;

use tasklist_core::Category;

use crate::components::CategorySelector;
use crate::context::use_app_context;

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();

    let (new_text, set_new_text) = signal(String::new());
    let (category, set_category) = signal(Category::default());
    let input_ref: NodeRef<Input> = NodeRef::new();

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.submit(&new_text.get_untracked(), category.get_untracked()) {
            set_new_text.set(String::new());
            if let Some(input) = input_ref.get_untracked() {
                if let Err(e) = input.focus() {
                    tracing::debug!(error = ?e, "could not refocus task input");
                }
            }
        }
    };

    view! {
        <form class="input-section" on:submit=create_task>
            <input
                type="text"
                class="todo-input"
                placeholder="Add a task..."
                node_ref=input_ref
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    // Enter that finishes an IME composition must not submit
                    if ev.key() == "Enter" && ev.is_composing() {
                        ev.prevent_default();
                    }
                }
            />
            <CategorySelector
                current=category
                on_change=move |selected: Category| set_category.set(selected)
            />
            <button type="submit" class="add-btn">"Add"</button>
        </form>
    }
}
