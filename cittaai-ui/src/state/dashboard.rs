//! Dashboard View Model
//!
//! Reactive state for every panel. Sequences write to it through
//! [`DashboardView`]; components only read.

use leptos::*;

use crate::api::{ApiError, FeedbackEntry, Metrics, Milestone};
use crate::dashboard::{BootSnapshot, DashboardView, LiveSnapshot};
use crate::forms::FormKind;
use crate::render::HeaderText;

/// How long a submission error stays on screen
const ERROR_TOAST_MS: u32 = 5000;

#[derive(Clone, Debug, PartialEq)]
pub enum BootStatus {
    Loading,
    Ready,
    Failed(String),
}

/// Dashboard state provided to all components
#[derive(Clone, Copy)]
pub struct DashboardState {
    pub boot: RwSignal<BootStatus>,
    pub header: RwSignal<HeaderText>,
    pub milestones: RwSignal<Vec<Milestone>>,
    pub metrics: RwSignal<Option<Metrics>>,
    pub feedback: RwSignal<Vec<FeedbackEntry>>,
    /// Last refresh failure, shown over the live panels until a refresh succeeds
    pub live_error: RwSignal<Option<String>>,
    pub predict_out: RwSignal<String>,
    pub feedback_out: RwSignal<String>,
    pub predict_busy: RwSignal<bool>,
    pub feedback_busy: RwSignal<bool>,
    /// Submission error toast
    pub error: RwSignal<Option<String>>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            boot: create_rw_signal(BootStatus::Loading),
            header: create_rw_signal(HeaderText::default()),
            milestones: create_rw_signal(Vec::new()),
            metrics: create_rw_signal(None),
            feedback: create_rw_signal(Vec::new()),
            live_error: create_rw_signal(None),
            predict_out: create_rw_signal(String::new()),
            feedback_out: create_rw_signal(String::new()),
            predict_busy: create_rw_signal(false),
            feedback_busy: create_rw_signal(false),
            error: create_rw_signal(None),
        }
    }

    pub fn output(&self, form: FormKind) -> RwSignal<String> {
        match form {
            FormKind::Predict => self.predict_out,
            FormKind::Feedback => self.feedback_out,
        }
    }

    pub fn busy(&self, form: FormKind) -> RwSignal<bool> {
        match form {
            FormKind::Predict => self.predict_busy,
            FormKind::Feedback => self.feedback_busy,
        }
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: String) {
        self.error.set(Some(message));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(ERROR_TOAST_MS, move || {
            error_signal.set(None);
        })
        .forget();
    }

    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardView for DashboardState {
    fn show_boot(&self, snapshot: BootSnapshot) {
        self.header.set(snapshot.header);
        self.milestones.set(snapshot.milestones);
        self.show_live(snapshot.live);
        self.boot.set(BootStatus::Ready);
    }

    fn show_boot_error(&self, error: &ApiError) {
        self.boot.set(BootStatus::Failed(error.to_string()));
    }

    fn show_live(&self, live: LiveSnapshot) {
        self.metrics.set(Some(live.metrics));
        self.feedback.set(live.feedback);
        self.live_error.set(None);
    }

    fn show_live_error(&self, error: &ApiError) {
        self.live_error.set(Some(error.to_string()));
    }

    fn show_output(&self, form: FormKind, text: String) {
        self.output(form).set(text);
    }

    fn set_submitting(&self, form: FormKind, submitting: bool) {
        self.busy(form).set(submitting);
    }

    fn notify_error(&self, message: String) {
        self.show_error(message);
    }
}

/// Provide dashboard state to the component tree
pub fn provide_dashboard_state() -> DashboardState {
    let state = DashboardState::new();
    provide_context(state);
    state
}
