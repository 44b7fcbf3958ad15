//! App Root Component
//!
//! Provides state and the API gateway, then boots the dashboard.

use leptos::*;

use crate::api::ApiGateway;
use crate::components::{Loading, Toast};
use crate::dashboard::boot_into;
use crate::pages::{BootFailure, Dashboard};
use crate::state::{provide_dashboard_state, BootStatus};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_dashboard_state();
    let gateway = ApiGateway::browser();
    provide_context(gateway.clone());

    spawn_local(async move {
        boot_into(&gateway, &state).await;
    });

    view! {
        {move || match state.boot.get() {
            BootStatus::Loading => view! { <Loading /> }.into_view(),
            BootStatus::Ready => view! {
                <Dashboard />
                <Toast />
            }
            .into_view(),
            BootStatus::Failed(message) => view! { <BootFailure message=message /> }.into_view(),
        }}
    }
}
