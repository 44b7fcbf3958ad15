//! Feedback List Component
//!
//! Latest feedback rows, truncated for display.

use leptos::*;

use crate::api::FeedbackEntry;
use crate::components::LiveErrorBanner;
use crate::render::{feedback_summary, feedback_view, format_timestamp, FeedbackView};
use crate::state::DashboardState;

/// Feedback panel (`#feedbackList`)
#[component]
pub fn FeedbackList() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <section class="panel">
            <h2>"Latest Feedback"</h2>
            <LiveErrorBanner />
            <div id="feedbackList">
                {move || {
                    let rows = state.feedback.get();
                    let rendered = match feedback_view(&rows) {
                        FeedbackView::Placeholder(text) => view! { <p>{text}</p> }.into_view(),
                        FeedbackView::Rows(shown) => shown
                            .iter()
                            .cloned()
                            .map(|entry| view! { <FeedbackRow entry=entry /> })
                            .collect_view(),
                    };
                    rendered
                }}
            </div>
        </section>
    }
}

#[component]
fn FeedbackRow(entry: FeedbackEntry) -> impl IntoView {
    let summary = feedback_summary(&entry);
    let created = format_timestamp(&entry.created_at);
    let tag_class = format!("tag {}", entry.severity);

    view! {
        <div class="row">
            <strong>{entry.user_id}</strong>
            " • "
            {entry.feature}
            " • "
            <span class=tag_class>{entry.severity}</span>
            <div>{summary}</div>
            <small>{created}</small>
        </div>
    }
}
