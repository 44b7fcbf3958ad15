//! UI Components
//!
//! Leptos components for the dashboard panels and forms.

pub mod feedback_form;
pub mod feedback_list;
pub mod live_error;
pub mod loading;
pub mod metric_card;
pub mod milestones;
pub mod predict_form;
pub mod toast;

pub use feedback_form::FeedbackForm;
pub use feedback_list::FeedbackList;
pub use live_error::LiveErrorBanner;
pub use loading::Loading;
pub use metric_card::{MetricCard, MetricsPanel};
pub use milestones::Milestones;
pub use predict_form::PredictForm;
pub use toast::Toast;
