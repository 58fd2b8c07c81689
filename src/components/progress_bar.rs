//! Progress Bar Component

use leptos::prelude::*;

use crate::store::{use_view_store, ViewStateStoreFields};

/// Completion readout with a proportional fill
#[component]
pub fn ProgressBar() -> impl IntoView {
    let store = use_view_store();

    view! {
        <div class="progress-section">
            <div class="progress-bar">
                <div class="progress-fill" style:width=move || store.progress().get().fill_width()></div>
            </div>
            <span class="progress-text">{move || store.progress().get().readout()}</span>
        </div>
    }
}
