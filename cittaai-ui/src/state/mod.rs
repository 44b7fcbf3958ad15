//! State Management
//!
//! The dashboard's view model, held in Leptos signals.

pub mod dashboard;

pub use dashboard::{provide_dashboard_state, BootStatus, DashboardState};
