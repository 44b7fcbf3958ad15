//! Live Update Error Banner
//!
//! Shown over the live panels after a failed refresh, with a retry.

use leptos::*;

use crate::api::ApiGateway;
use crate::dashboard::refresh_into;
use crate::state::DashboardState;

#[component]
pub fn LiveErrorBanner() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let gateway = use_context::<ApiGateway>().expect("ApiGateway not found");
    let (retrying, set_retrying) = create_signal(false);

    let on_retry = move |_: ev::MouseEvent| {
        let gateway = gateway.clone();
        set_retrying.set(true);
        spawn_local(async move {
            refresh_into(&gateway, &state).await;
            set_retrying.set(false);
        });
    };

    view! {
        {move || {
            state.live_error.get().map(|message| view! {
                <div class="live-error" role="alert">
                    <span>{format!("Live update failed: {}", message)}</span>
                    <button
                        type="button"
                        disabled=move || retrying.get()
                        on:click=on_retry.clone()
                    >
                        "Retry"
                    </button>
                </div>
            })
        }}
    }
}
