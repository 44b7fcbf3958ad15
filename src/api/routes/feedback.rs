//! Feedback Routes
//!
//! - GET /api/feedback - All feedback, newest first
//! - POST /api/feedback - Record a feedback entry

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::dto::FeedbackRequest;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::store::FeedbackRecord;

/// GET /api/feedback
pub async fn list_feedback(State(state): State<Arc<AppState>>) -> Json<Vec<FeedbackRecord>> {
    Json(state.feedback.list().await)
}

/// POST /api/feedback
pub async fn submit_feedback(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<FeedbackRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<FeedbackRecord>)> {
    let Json(req) = payload?;
    let new = req.validate()?;
    let record = state.feedback.append(new).await?;
    Ok((StatusCode::CREATED, Json(record)))
}
