//! Prediction Form Component
//!
//! Scores an account and shows the raw API response.

use leptos::*;

use crate::api::ApiGateway;
use crate::dashboard::log_error;
use crate::forms::{handle_prediction, read_prediction, submitted_form_data};
use crate::state::DashboardState;

/// Prediction form (`#predictForm`) with its output (`#predictOut`)
#[component]
pub fn PredictForm() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let gateway = use_context::<ApiGateway>().expect("ApiGateway not found");

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(data) = submitted_form_data(&ev) else {
            log_error("Prediction form data unavailable");
            return;
        };
        let request = read_prediction(&data);

        let gateway = gateway.clone();
        spawn_local(async move {
            handle_prediction(&gateway, &state, request).await;
        });
    };

    view! {
        <section class="panel">
            <h2>"Churn Risk Prediction"</h2>
            <form id="predictForm" class="form" novalidate=true on:submit=on_submit>
                <label>
                    "Account ID"
                    <input name="account_id" type="text" placeholder="acct_001" />
                </label>
                <label>
                    "Events (last 7d)"
                    <input name="events_last_7d" type="number" step="any" />
                </label>
                <label>
                    "Active minutes (last 7d)"
                    <input name="active_minutes_last_7d" type="number" step="any" />
                </label>
                <label>
                    "Error rate"
                    <input name="error_rate" type="number" step="any" />
                </label>
                <label>
                    "Feedback (last 30d)"
                    <input name="feedback_count_last_30d" type="number" step="any" />
                </label>
                <button type="submit" disabled=move || state.predict_busy.get()>
                    "Predict"
                </button>
            </form>
            <pre id="predictOut">{move || state.predict_out.get()}</pre>
        </section>
    }
}
