//! Inline Edit Field Component
//!
//! Replaces a row's text while editing. Enter and blur both commit,
//! Escape cancels.

use leptos::html::Input;
use leptos::prelude::*;

use tasklist_core::TaskId;

use crate::context::use_app_context;

#[component]
pub fn EditField(id: TaskId, text: String) -> impl IntoView {
    let ctx = use_app_context();
    let input_ref: NodeRef<Input> = NodeRef::new();

    // Focus and select the current text once mounted
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            if let Err(e) = input.focus() {
                tracing::debug!(error = ?e, %id, "could not focus edit field");
            }
            input.select();
        }
    });

    view! {
        <input
            type="text"
            class="edit-input"
            node_ref=input_ref
            value=text
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if ev.is_composing() {
                    return;
                }
                match ev.key().as_str() {
                    "Enter" => {
                        ev.prevent_default();
                        ctx.confirm_edit(id, &event_target_value(&ev));
                    }
                    "Escape" => ctx.cancel_edit(id),
                    _ => {}
                }
            }
            on:blur=move |ev| ctx.blur_edit(id, &event_target_value(&ev))
        />
    }
}
