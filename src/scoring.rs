//! Account Risk Scoring
//!
//! Heuristic churn-risk score for beta accounts. The score is the sum of
//! four capped components, clamped to `0..=100`:
//!
//! | Signal | Contribution |
//! |---|---|
//! | events in last 7 days | `3` per event, max `30` |
//! | active minutes in last 7 days | `25 - minutes / 8`, floor `0` |
//! | error rate | `error_rate * 35`, truncated |
//! | feedback items in last 30 days | `5` per item, max `20` |
//!
//! Bands: `high` at 70 and above, `medium` at 40 and above, else `low`.

use serde::Serialize;

/// Score at or above which an account is high priority
pub const HIGH_BAND_THRESHOLD: u32 = 70;
/// Score at or above which an account is medium priority
pub const MEDIUM_BAND_THRESHOLD: u32 = 40;

const MAX_CONFIDENCE: f64 = 0.93;

/// Validated usage signals for one account
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSignals {
    pub account_id: String,
    pub events_last_7d: u64,
    pub active_minutes_last_7d: u64,
    pub error_rate: f64,
    pub feedback_count_last_30d: u64,
}

/// Priority band derived from the risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityBand {
    Low,
    Medium,
    High,
}

impl PriorityBand {
    pub fn from_score(score: u32) -> Self {
        if score >= HIGH_BAND_THRESHOLD {
            PriorityBand::High
        } else if score >= MEDIUM_BAND_THRESHOLD {
            PriorityBand::Medium
        } else {
            PriorityBand::Low
        }
    }
}

/// Scoring result returned by `POST /api/predict`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub account_id: String,
    pub risk_score: u32,
    pub priority_band: PriorityBand,
    pub confidence: f64,
    pub recommended_actions: Vec<String>,
}

/// Score an account
pub fn score(signals: &AccountSignals) -> Prediction {
    let events = signals.events_last_7d.saturating_mul(3).min(30);
    let inactivity = 25 - (signals.active_minutes_last_7d / 8).min(25);
    let errors = (signals.error_rate * 100.0 * 0.35) as u64;
    let feedback = signals.feedback_count_last_30d.saturating_mul(5).min(20);

    let risk_score = (events + inactivity + errors + feedback).min(100) as u32;
    let priority_band = PriorityBand::from_score(risk_score);

    let confidence =
        round2(0.62 + signals.events_last_7d.min(8) as f64 * 0.03).min(MAX_CONFIDENCE);

    Prediction {
        account_id: signals.account_id.clone(),
        risk_score,
        priority_band,
        confidence,
        recommended_actions: recommend(risk_score, signals),
    }
}

fn recommend(risk_score: u32, signals: &AccountSignals) -> Vec<String> {
    let mut actions = Vec::new();

    if signals.error_rate >= 0.15 {
        actions.push("Run reliability review and add endpoint-level alerting");
    }
    if signals.active_minutes_last_7d < 90 {
        actions.push("Trigger onboarding nudge and guided product tour");
    }
    if risk_score >= HIGH_BAND_THRESHOLD {
        actions.push("Escalate account to beta success manager within 24h");
    }
    if actions.is_empty() {
        actions.push("Maintain current cadence and monitor weekly trend");
    }

    actions.into_iter().map(String::from).collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
