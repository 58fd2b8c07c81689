//! Category Selector Component

use leptos::prelude::*;

use tasklist_core::Category;

/// Drop-down of the fixed categories
#[component]
pub fn CategorySelector(
    current: ReadSignal<Category>,
    on_change: impl Fn(Category) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            class="category-select"
            prop:value=move || current.get().as_str()
            on:change=move |ev| {
                match event_target_value(&ev).parse::<Category>() {
                    Ok(selected) => on_change(selected),
                    Err(e) => tracing::warn!(error = %e, "ignored category selection"),
                }
            }
        >
            {Category::ALL.iter().map(|category| {
                view! {
                    <option value=category.as_str()>{category.label()}</option>
                }
            }).collect_view()}
        </select>
    }
}
