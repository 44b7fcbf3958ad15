//! Feedback Form Component

use leptos::*;

use crate::api::ApiGateway;
use crate::dashboard::log_error;
use crate::forms::{handle_feedback, read_feedback, submitted_form_data};
use crate::state::DashboardState;

const SENTIMENTS: &[&str] = &["positive", "neutral", "negative"];
const SEVERITIES: &[&str] = &["low", "medium", "high"];

/// Feedback form (`#feedbackForm`) with its confirmation (`#feedbackOut`)
#[component]
pub fn FeedbackForm() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let gateway = use_context::<ApiGateway>().expect("ApiGateway not found");

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(data) = submitted_form_data(&ev) else {
            log_error("Feedback form data unavailable");
            return;
        };
        let submission = read_feedback(&data);

        let gateway = gateway.clone();
        spawn_local(async move {
            handle_feedback(&gateway, &state, submission).await;
        });
    };

    view! {
        <section class="panel">
            <h2>"Beta Feedback"</h2>
            <form id="feedbackForm" class="form" novalidate=true on:submit=on_submit>
                <label>
                    "User ID"
                    <input name="user_id" type="text" placeholder="beta_user_01" />
                </label>
                <label>
                    "Feature"
                    <input name="feature" type="text" placeholder="risk_dashboard" />
                </label>
                <label>
                    "Sentiment"
                    <Choice name="sentiment" options=SENTIMENTS />
                </label>
                <label>
                    "Severity"
                    <Choice name="severity" options=SEVERITIES />
                </label>
                <label>
                    "Message"
                    <textarea name="message" rows="3" />
                </label>
                <button type="submit" disabled=move || state.feedback_busy.get()>
                    "Send feedback"
                </button>
            </form>
            <p id="feedbackOut">{move || state.feedback_out.get()}</p>
        </section>
    }
}

#[component]
fn Choice(name: &'static str, options: &'static [&'static str]) -> impl IntoView {
    view! {
        <select name=name>
            {options
                .iter()
                .map(|option| view! { <option value=*option>{*option}</option> })
                .collect_view()}
        </select>
    }
}
