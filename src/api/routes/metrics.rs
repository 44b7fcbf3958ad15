//! Metrics Routes
//!
//! - GET /api/metrics - Beta rollout counters

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::MetricsResponse;
use crate::api::state::AppState;

/// GET /api/metrics
pub async fn get_metrics(State(state): State<Arc<AppState>>) -> Json<MetricsResponse> {
    let summary = state.feedback.summary().await;

    Json(MetricsResponse {
        prediction_count: state.prediction_count(),
        feedback_total: summary.total,
        feedback_negative: summary.negative,
        feedback_high_severity: summary.high_severity,
        feedback_response_sla_hours: state.config.metrics.feedback_response_sla_hours,
    })
}
