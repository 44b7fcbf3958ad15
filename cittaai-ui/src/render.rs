//! View helpers
//!
//! Pure functions deciding what each panel shows. Components only turn
//! their output into markup; every value ends up in a text node.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::api::{js_number_text, FeedbackEntry, HealthStatus, Metrics, Roadmap};

/// Rows shown in the feedback panel. Display policy, not an API limit.
pub const FEEDBACK_DISPLAY_LIMIT: usize = 8;

/// Shown instead of rows when there is no feedback
pub const FEEDBACK_PLACEHOLDER: &str = "No feedback yet.";

/// Header text fields filled at boot
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeaderText {
    pub title: String,
    pub focus: String,
    pub assignee: String,
    pub date: String,
    pub health: String,
}

impl HeaderText {
    pub fn new(roadmap: &Roadmap, health: &HealthStatus) -> Self {
        Self {
            title: roadmap.project.clone(),
            focus: roadmap.beta_focus.clone(),
            assignee: format!("Assignee: {}", roadmap.assignee),
            date: format!("Date: {}", roadmap.date),
            health: format!("Service: {}", health.status),
        }
    }
}

/// Label/value pair rendered as one metric card
#[derive(Clone, Debug, PartialEq)]
pub struct MetricCardData {
    pub label: &'static str,
    pub value: String,
}

pub fn metric_card(label: &'static str, value: f64) -> MetricCardData {
    MetricCardData {
        label,
        value: format_number(value),
    }
}

/// The five metric cards, always in this order
pub fn metric_cards(metrics: &Metrics) -> [MetricCardData; 5] {
    [
        metric_card("Predictions", metrics.prediction_count),
        metric_card("Feedback Total", metrics.feedback_total),
        metric_card("Negative Feedback", metrics.feedback_negative),
        metric_card("High Severity", metrics.feedback_high_severity),
        metric_card("SLA (hrs)", metrics.feedback_response_sla_hours),
    ]
}

/// What the feedback panel shows
#[derive(Debug, PartialEq)]
pub enum FeedbackView<'a> {
    Placeholder(&'static str),
    Rows(&'a [FeedbackEntry]),
}

/// Placeholder for an empty list, otherwise the first rows in API order
pub fn feedback_view(rows: &[FeedbackEntry]) -> FeedbackView<'_> {
    if rows.is_empty() {
        FeedbackView::Placeholder(FEEDBACK_PLACEHOLDER)
    } else {
        FeedbackView::Rows(&rows[..rows.len().min(FEEDBACK_DISPLAY_LIMIT)])
    }
}

/// `sentiment: message` line of a feedback row
pub fn feedback_summary(entry: &FeedbackEntry) -> String {
    format!("{}: {}", entry.sentiment, entry.message)
}

/// Render a number the way the browser prints it
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        js_number_text(value)
    }
}

/// Text for an id of any JSON type; strings are shown without quotes
pub fn display_id(id: &serde_json::Value) -> String {
    match id {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Local date-time text for a `created_at` value.
///
/// In the browser the text comes from `Date`, so it follows the user's
/// locale and accepts whatever the engine parses.
#[cfg(target_arch = "wasm32")]
pub fn format_timestamp(raw: &str) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
    if date.get_time().is_nan() {
        return "Invalid Date".to_string();
    }
    date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED).into()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn format_timestamp(raw: &str) -> String {
    format_timestamp_in(raw, &chrono::Local)
}

/// Parses RFC 3339, zone-less date-times with a `T` or space separator
/// (read as local time) and bare dates (read as UTC midnight). Anything
/// else is `Invalid Date`. Output is the `en-US` layout.
pub fn format_timestamp_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    const FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(tz).format(FORMAT).to_string();
    }

    const NAIVE: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];
    for pattern in NAIVE {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            if let Some(dt) = tz.from_local_datetime(&naive).earliest() {
                return dt.format(FORMAT).to_string();
            }
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Utc
                .from_utc_datetime(&midnight)
                .with_timezone(tz)
                .format(FORMAT)
                .to_string();
        }
    }

    "Invalid Date".to_string()
}
