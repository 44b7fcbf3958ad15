//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! Requests are deserialized leniently and then validated, so a bad field
//! produces a readable validation message instead of a serde error.

use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::scoring::AccountSignals;
use crate::store::{NewFeedback, Sentiment, Severity};

// ============================================
// HEALTH DTOs
// ============================================

/// `GET /api/health` response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub utc: String,
    pub version: String,
    pub uptime_seconds: u64,
}

// ============================================
// PREDICT DTOs
// ============================================

/// `POST /api/predict` request
///
/// Numbers are optional so that `null` (what a browser sends for NaN) is
/// reported as a validation error on the offending field.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub account_id: String,
    pub events_last_7d: Option<f64>,
    pub active_minutes_last_7d: Option<f64>,
    pub error_rate: Option<f64>,
    pub feedback_count_last_30d: Option<f64>,
}

impl PredictRequest {
    pub fn validate(self) -> ApiResult<AccountSignals> {
        if self.account_id.chars().count() < 2 {
            return Err(ApiError::Validation(
                "account_id must be at least 2 characters".to_string(),
            ));
        }

        let error_rate = require_number("error_rate", self.error_rate)?;
        if !(0.0..=1.0).contains(&error_rate) {
            return Err(ApiError::Validation(
                "error_rate must be between 0 and 1".to_string(),
            ));
        }

        Ok(AccountSignals {
            account_id: self.account_id,
            events_last_7d: require_count("events_last_7d", self.events_last_7d)?,
            active_minutes_last_7d: require_count(
                "active_minutes_last_7d",
                self.active_minutes_last_7d,
            )?,
            error_rate,
            feedback_count_last_30d: require_count(
                "feedback_count_last_30d",
                self.feedback_count_last_30d,
            )?,
        })
    }
}

fn require_number(field: &str, value: Option<f64>) -> ApiResult<f64> {
    match value {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(ApiError::Validation(format!("{} must be a number", field))),
    }
}

fn require_count(field: &str, value: Option<f64>) -> ApiResult<u64> {
    let v = require_number(field, value)?;
    if v.fract() != 0.0 {
        return Err(ApiError::Validation(format!("{} must be an integer", field)));
    }
    if v < 0.0 {
        return Err(ApiError::Validation(format!("{} must be >= 0", field)));
    }
    Ok(v as u64)
}

// ============================================
// FEEDBACK DTOs
// ============================================

/// `POST /api/feedback` request
#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub user_id: String,
    pub feature: String,
    pub sentiment: String,
    pub severity: String,
    pub message: String,
}

impl FeedbackRequest {
    pub fn validate(self) -> ApiResult<NewFeedback> {
        require_len("user_id", &self.user_id, 2)?;
        require_len("feature", &self.feature, 2)?;
        require_len("message", &self.message, 3)?;

        let sentiment = Sentiment::parse(&self.sentiment).ok_or_else(|| {
            ApiError::Validation(
                "sentiment must be one of positive, neutral, negative".to_string(),
            )
        })?;
        let severity = Severity::parse(&self.severity).ok_or_else(|| {
            ApiError::Validation("severity must be one of low, medium, high".to_string())
        })?;

        Ok(NewFeedback {
            user_id: self.user_id,
            feature: self.feature,
            sentiment,
            severity,
            message: self.message,
        })
    }
}

fn require_len(field: &str, value: &str, min: usize) -> ApiResult<()> {
    if value.chars().count() < min {
        return Err(ApiError::Validation(format!(
            "{} must be at least {} characters",
            field, min
        )));
    }
    Ok(())
}

// ============================================
// METRICS DTOs
// ============================================

/// `GET /api/metrics` response
#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub prediction_count: u64,
    pub feedback_total: usize,
    pub feedback_negative: usize,
    pub feedback_high_severity: usize,
    pub feedback_response_sla_hours: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn predict(json: &str) -> ApiResult<AccountSignals> {
        serde_json::from_str::<PredictRequest>(json).unwrap().validate()
    }

    #[test]
    fn test_valid_predict_request() {
        let signals = predict(
            r#"{"account_id":"a1","events_last_7d":10,"active_minutes_last_7d":5,
                "error_rate":0.1,"feedback_count_last_30d":2}"#,
        )
        .unwrap();
        assert_eq!(signals.events_last_7d, 10);
        assert_eq!(signals.active_minutes_last_7d, 5);
        assert_eq!(signals.feedback_count_last_30d, 2);
    }

    #[test]
    fn test_predict_rejects_null_number() {
        let err = predict(
            r#"{"account_id":"a1","events_last_7d":null,"active_minutes_last_7d":5,
                "error_rate":0.1,"feedback_count_last_30d":2}"#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Validation error: events_last_7d must be a number");
    }

    #[test]
    fn test_predict_rejects_out_of_range() {
        let err = predict(
            r#"{"account_id":"a1","events_last_7d":1,"active_minutes_last_7d":5,
                "error_rate":1.5,"feedback_count_last_30d":2}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("error_rate"));

        let err = predict(
            r#"{"account_id":"a1","events_last_7d":-1,"active_minutes_last_7d":5,
                "error_rate":0.5,"feedback_count_last_30d":2}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("events_last_7d must be >= 0"));

        let err = predict(
            r#"{"account_id":"a","events_last_7d":1,"active_minutes_last_7d":5,
                "error_rate":0.5,"feedback_count_last_30d":2}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("account_id"));
    }

    #[test]
    fn test_predict_rejects_fractional_count() {
        let err = predict(
            r#"{"account_id":"a1","events_last_7d":1.5,"active_minutes_last_7d":5,
                "error_rate":0.5,"feedback_count_last_30d":2}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("must be an integer"));
    }

    #[test]
    fn test_feedback_validation() {
        let ok: FeedbackRequest = serde_json::from_str(
            r#"{"user_id":"u1","feature":"dashboard","sentiment":"negative",
                "severity":"high","message":"Too slow"}"#,
        )
        .unwrap();
        let new = ok.validate().unwrap();
        assert_eq!(new.sentiment, Sentiment::Negative);
        assert_eq!(new.severity, Severity::High);

        let bad: FeedbackRequest = serde_json::from_str(
            r#"{"user_id":"u1","feature":"f","sentiment":"positive",
                "severity":"low","message":"hi"}"#,
        )
        .unwrap();
        let err = bad.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: feature must be at least 2 characters"
        );

        let bad: FeedbackRequest = serde_json::from_str(
            r#"{"user_id":"u1","feature":"ff","sentiment":"angry",
                "severity":"low","message":"hello"}"#,
        )
        .unwrap();
        assert!(bad.validate().unwrap_err().to_string().contains("sentiment"));
    }
}
