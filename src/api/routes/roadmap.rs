//! Roadmap Routes
//!
//! - GET /api/roadmap - Beta roadmap with milestones

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::store::Roadmap;

/// GET /api/roadmap
pub async fn get_roadmap(State(state): State<Arc<AppState>>) -> ApiResult<Json<Roadmap>> {
    Ok(Json(state.roadmap.load().await?))
}
