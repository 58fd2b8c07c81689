//! Task Item Component
//!
//! One row: completion toggle, click-to-edit text, category badge, delete.

use leptos::prelude::*;

use tasklist_core::TaskRow;

use crate::components::EditField;
use crate::context::use_app_context;

#[component]
pub fn TaskItem(row: TaskRow) -> impl IntoView {
    let ctx = use_app_context();

    let id = row.id;
    let completed = row.completed;
    let class = row.class();
    let badge_class = row.badge_class();
    let label = row.category_label;
    let text = row.text;

    view! {
        <li class=class data-id=id.to_string()>
            <input
                type="checkbox"
                class="todo-checkbox"
                prop:checked=completed
                on:change=move |_| ctx.toggle(id)
            />

            <div class="todo-content">
                {if row.editing {
                    view! { <EditField id=id text=text /> }.into_any()
                } else {
                    view! {
                        <span class="todo-text" on:click=move |_| ctx.begin_edit(id)>{text}</span>
                    }.into_any()
                }}
                <span class=badge_class>{label}</span>
            </div>

            <button type="button" class="delete-btn" on:click=move |_| ctx.delete(id)>"×"</button>
        </li>
    }
}
