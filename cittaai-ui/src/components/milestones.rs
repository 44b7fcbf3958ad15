//! Milestones Component

use leptos::*;

use crate::api::Milestone;
use crate::state::DashboardState;

/// Roadmap milestones (`#milestones`), one card each in roadmap order
#[component]
pub fn Milestones() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <section class="panel">
            <h2>"Roadmap"</h2>
            <div id="milestones" class="milestones">
                {move || {
                    state.milestones.get()
                        .into_iter()
                        .map(|milestone| view! { <MilestoneCard milestone=milestone /> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

#[component]
fn MilestoneCard(milestone: Milestone) -> impl IntoView {
    view! {
        <article class="card">
            <span class="window">{milestone.window}</span>
            <h3>{milestone.title}</h3>
            <ul>
                {milestone.deliverables
                    .into_iter()
                    .map(|d| view! { <li>{d}</li> })
                    .collect_view()}
            </ul>
        </article>
    }
}
