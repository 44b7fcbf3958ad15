//! CittaAI Beta Dashboard
//!
//! Client-side rendered Leptos application (WASM) for the beta rollout:
//! roadmap, live prediction and feedback metrics, and the prediction and
//! feedback forms. It talks to the CittaAI API on the page's own origin.

use leptos::*;

mod api;
mod app;
mod components;
mod dashboard;
mod forms;
mod pages;
mod render;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
