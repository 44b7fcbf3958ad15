//! Loading Component

use leptos::*;

/// Full-page spinner shown until the first load settles
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading" aria-busy="true">
            <div class="loading-spinner" />
            <span>"Loading dashboard..."</span>
        </div>
    }
}
