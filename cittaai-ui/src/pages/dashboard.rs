//! Dashboard Page
//!
//! The single page: header, live panels, roadmap and the two forms.

use leptos::*;

use crate::components::{FeedbackForm, FeedbackList, MetricsPanel, Milestones, PredictForm};
use crate::state::DashboardState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let header = move || state.header.get();

    view! {
        <header class="header">
            <div>
                <h1 id="title">{move || header().title}</h1>
                <p id="focus">{move || header().focus}</p>
            </div>
            <div class="meta">
                <span id="assignee">{move || header().assignee}</span>
                <span id="date">{move || header().date}</span>
                <span id="health">{move || header().health}</span>
            </div>
        </header>

        <main class="layout">
            <MetricsPanel />
            <FeedbackList />
            <Milestones />
            <div class="forms">
                <PredictForm />
                <FeedbackForm />
            </div>
        </main>
    }
}

/// Whole-page error shown when the first load fails
#[component]
pub fn BootFailure(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <main style="padding:2rem;font-family:sans-serif">
            {format!("App failed to load: {}", message)}
        </main>
    }
}
