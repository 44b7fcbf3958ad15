//! Store record types
//!
//! These are the shapes persisted to disk and returned verbatim by the API.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Beta roadmap document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    pub project: String,
    #[serde(rename = "betaFocus")]
    pub beta_focus: String,
    pub assignee: String,
    pub date: String,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

/// One time-boxed roadmap milestone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub window: String,
    pub title: String,
    #[serde(default)]
    pub deliverables: Vec<String>,
}

impl Roadmap {
    /// Roadmap written on first run so a fresh checkout renders a full page
    pub fn seed(date: impl Into<String>) -> Self {
        let milestone = |window: &str, title: &str, deliverables: &[&str]| Milestone {
            window: window.to_string(),
            title: title.to_string(),
            deliverables: deliverables.iter().map(|d| d.to_string()).collect(),
        };

        Self {
            project: "CittaAI Phase 1 Beta MVP".to_string(),
            beta_focus: "Validate risk scoring and feedback loop with 10–20 design partners."
                .to_string(),
            assignee: "Owner: Beta Lead".to_string(),
            date: date.into(),
            milestones: vec![
                milestone(
                    "Week 1–2",
                    "Instrument core flows",
                    &[
                        "Add event tracking to key product journeys",
                        "Ship initial risk scoring model behind feature flag",
                    ],
                ),
                milestone(
                    "Week 3–4",
                    "Close feedback loop",
                    &[
                        "Onboard first 5–10 beta accounts",
                        "Review negative feedback within 48 hours",
                        "Tune thresholds for high‑risk accounts",
                    ],
                ),
                milestone(
                    "Week 5–6",
                    "Stabilize and prepare GA",
                    &[
                        "Harden alerts and dashboards for on‑call",
                        "Document runbooks for top 3 incident types",
                        "Define success metrics for GA rollout",
                    ],
                ),
            ],
        }
    }
}

/// Feedback sentiment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// Feedback severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Sentiment {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "positive" => Some(Self::Positive),
            "neutral" => Some(Self::Neutral),
            "negative" => Some(Self::Negative),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl Severity {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated feedback submission, before it is assigned an id
#[derive(Debug, Clone, PartialEq)]
pub struct NewFeedback {
    pub user_id: String,
    pub feature: String,
    pub sentiment: Sentiment,
    pub severity: Severity,
    pub message: String,
}

/// Stored feedback entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: String,
    pub created_at: String,
    pub user_id: String,
    pub feature: String,
    pub sentiment: Sentiment,
    pub severity: Severity,
    pub message: String,
}

impl FeedbackRecord {
    /// Stamp a submission with a short random id and the current UTC time
    pub fn from_new(new: NewFeedback) -> Self {
        let mut id = uuid::Uuid::new_v4().to_string();
        id.truncate(8);

        Self {
            id,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false),
            user_id: new.user_id,
            feature: new.feature,
            sentiment: new.sentiment,
            severity: new.severity,
            message: new.message,
        }
    }
}
