//! Boot and refresh sequences
//!
//! Both are fail-fast joins over gateway calls. The results are pushed into
//! a [`DashboardView`], which the reactive state implements in the browser
//! and a recorder implements in tests.

use futures::future::{try_join, try_join4};

use crate::api::{ApiError, ApiGateway, ApiResult, FeedbackEntry, Metrics, Milestone};
use crate::forms::FormKind;
use crate::render::HeaderText;

/// Everything the first render needs
#[derive(Clone, Debug, PartialEq)]
pub struct BootSnapshot {
    pub header: HeaderText,
    pub milestones: Vec<Milestone>,
    pub live: LiveSnapshot,
}

/// The panels that change while the page is open
#[derive(Clone, Debug, PartialEq)]
pub struct LiveSnapshot {
    pub metrics: Metrics,
    pub feedback: Vec<FeedbackEntry>,
}

/// Sink for sequence results
pub trait DashboardView {
    fn show_boot(&self, snapshot: BootSnapshot);

    /// Terminal; replaces the whole page
    fn show_boot_error(&self, error: &ApiError);

    /// Replaces metrics and feedback, clearing any live error
    fn show_live(&self, live: LiveSnapshot);

    fn show_live_error(&self, error: &ApiError);

    fn show_output(&self, form: FormKind, text: String);

    fn set_submitting(&self, form: FormKind, submitting: bool);

    /// Transient notice for a failed submission
    fn notify_error(&self, message: String);
}

/// Fetch health, roadmap, metrics and feedback together
pub async fn boot(gateway: &ApiGateway) -> ApiResult<BootSnapshot> {
    let (health, roadmap, metrics, feedback) = try_join4(
        gateway.health(),
        gateway.roadmap(),
        gateway.metrics(),
        gateway.feedback(),
    )
    .await?;

    Ok(BootSnapshot {
        header: HeaderText::new(&roadmap, &health),
        milestones: roadmap.milestones,
        live: LiveSnapshot { metrics, feedback },
    })
}

/// Fetch metrics and feedback together
pub async fn refresh(gateway: &ApiGateway) -> ApiResult<LiveSnapshot> {
    let (metrics, feedback) = try_join(gateway.metrics(), gateway.feedback()).await?;
    Ok(LiveSnapshot { metrics, feedback })
}

pub async fn boot_into<V: DashboardView + ?Sized>(gateway: &ApiGateway, view: &V) {
    match boot(gateway).await {
        Ok(snapshot) => view.show_boot(snapshot),
        Err(e) => {
            log_error(&format!("App failed to load: {}", e));
            view.show_boot_error(&e);
        }
    }
}

/// Returns whether the live panels were updated
pub async fn refresh_into<V: DashboardView + ?Sized>(gateway: &ApiGateway, view: &V) -> bool {
    match refresh(gateway).await {
        Ok(live) => {
            view.show_live(live);
            true
        }
        Err(e) => {
            log_error(&format!("Live update failed: {}", e));
            view.show_live_error(&e);
            false
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn log_error(message: &str) {
    eprintln!("{}", message);
}
