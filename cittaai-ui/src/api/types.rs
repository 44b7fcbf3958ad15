//! API payload types
//!
//! One type per payload shape the dashboard exchanges with the API. Inbound
//! types are checked at the gateway, so a missing or mistyped field becomes
//! an `ApiError::Validation` instead of a broken render.

use serde::{ser::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;

/// `GET /api/health`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

/// `GET /api/roadmap`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Roadmap {
    pub project: String,
    #[serde(rename = "betaFocus")]
    pub beta_focus: String,
    pub assignee: String,
    pub date: String,
    #[serde(default, deserialize_with = "nullable_list")]
    pub milestones: Vec<Milestone>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Milestone {
    pub window: String,
    pub title: String,
    #[serde(default, deserialize_with = "nullable_list")]
    pub deliverables: Vec<String>,
}

/// `GET /api/metrics`
///
/// Values are kept as plain numbers; they are only ever displayed.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Metrics {
    pub prediction_count: f64,
    pub feedback_total: f64,
    pub feedback_negative: f64,
    pub feedback_high_severity: f64,
    pub feedback_response_sla_hours: f64,
}

/// One row of `GET /api/feedback`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FeedbackEntry {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub user_id: String,
    pub feature: String,
    pub sentiment: String,
    pub severity: String,
    pub message: String,
    pub created_at: String,
}

/// `POST /api/feedback` response; only the id is used
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SavedFeedback {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
}

/// `POST /api/predict` body
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub account_id: String,
    pub events_last_7d: JsNumber,
    pub active_minutes_last_7d: JsNumber,
    pub error_rate: JsNumber,
    pub feedback_count_last_30d: JsNumber,
}

/// `POST /api/feedback` body
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FeedbackSubmission {
    pub user_id: String,
    pub feature: String,
    pub sentiment: String,
    pub severity: String,
    pub message: String,
}

/// A number that serializes the way a browser's `JSON.stringify` does:
/// integral values without a fraction, NaN and infinities as `null`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JsNumber(pub f64);

/// Largest integer a double represents exactly
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl Serialize for JsNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let v = self.0;
        if !v.is_finite() {
            serializer.serialize_unit()
        } else if v.fract() == 0.0 && v.abs() <= MAX_SAFE_INTEGER {
            serializer.serialize_i64(v as i64)
        } else {
            RawValue::from_string(js_number_text(v))
                .map_err(S::Error::custom)?
                .serialize(serializer)
        }
    }
}

/// Text of a finite number as `Number.prototype.toString` writes it:
/// plain digits for exponents in `-7..21`, otherwise `1.5e+300` style.
pub fn js_number_text(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }

    // `{:e}` gives the shortest round-trip digits, e.g. `-1.5e-7`
    let sci = format!("{:e}", v.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let n = exp.parse::<i32>().unwrap_or(0) + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{}.{}", int, frac)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let (lead, rest) = digits.split_at(1);
        let sign = if n - 1 < 0 { '-' } else { '+' };
        if rest.is_empty() {
            format!("{}e{}{}", lead, sign, (n - 1).abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, sign, (n - 1).abs())
        }
    };

    if v < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

fn nullable_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
