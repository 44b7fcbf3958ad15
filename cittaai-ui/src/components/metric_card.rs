//! Metric Card Component
//!
//! The metrics panel: five label/value cards.

use leptos::*;

use crate::components::LiveErrorBanner;
use crate::render::metric_cards;
use crate::state::DashboardState;

/// Metric card component
#[component]
pub fn MetricCard(
    label: &'static str,
    #[prop(into)]
    value: String,
) -> impl IntoView {
    view! {
        <div class="metric">
            <strong>{label}</strong>
            <span>{value}</span>
        </div>
    }
}

/// Metrics panel (`#metrics`)
#[component]
pub fn MetricsPanel() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <section class="panel">
            <h2>"Beta Metrics"</h2>
            <LiveErrorBanner />
            <div id="metrics" class="metrics">
                {move || {
                    state.metrics.get().map(|metrics| {
                        metric_cards(&metrics)
                            .into_iter()
                            .map(|card| view! { <MetricCard label=card.label value=card.value /> })
                            .collect_view()
                    })
                }}
            </div>
        </section>
    }
}
