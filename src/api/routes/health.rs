//! Health Routes
//!
//! - GET /api/health - Service status consumed by the dashboard header
//! - GET /health/live - Liveness probe (process is alive)

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    Json,
};
use chrono::Utc;
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::error::ApiError;
use crate::api::state::AppState;

const SERVICE_NAME: &str = "cittaai-phase1-beta";

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /api/health
pub async fn api_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
        utc: Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
    })
}

/// Unknown `/api/*` paths get a JSON 404 instead of the dashboard page
pub async fn api_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No API route for {}", uri.path()))
}
