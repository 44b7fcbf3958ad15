//! Toast Notification Component
//!
//! Shows submission errors until they time out or are dismissed.

use leptos::*;

use crate::state::DashboardState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <div class="toasts">
            {move || {
                state.error.get().map(|msg| view! {
                    <div class="toast error" role="alert">
                        <span class="icon">"✕"</span>
                        <span>{msg}</span>
                        <button type="button" on:click=move |_| state.clear_error()>
                            "Dismiss"
                        </button>
                    </div>
                })
            }}
        </div>
    }
}
