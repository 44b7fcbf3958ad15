//! Prediction Routes
//!
//! - POST /api/predict - Score an account's churn risk

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::PredictRequest;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::scoring::{self, Prediction};

/// POST /api/predict
///
/// Validates the usage signals, scores them and bumps the prediction counter
/// reported by `/api/metrics`.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> ApiResult<Json<Prediction>> {
    let Json(req) = payload?;
    let signals = req.validate()?;
    let prediction = scoring::score(&signals);
    let served = state.record_prediction();

    tracing::info!(
        account_id = %prediction.account_id,
        risk_score = prediction.risk_score,
        band = ?prediction.priority_band,
        served,
        "Scored account"
    );

    Ok(Json(prediction))
}
