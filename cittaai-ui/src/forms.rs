//! Form submission
//!
//! Reads the prediction and feedback forms, posts them, and hands the
//! result to the view. No field is validated here; the API is the judge.

use wasm_bindgen::JsCast;

use crate::api::{
    ApiError, ApiGateway, ApiResult, FeedbackSubmission, JsNumber, PredictionRequest,
};
use crate::dashboard::{log_error, refresh_into, DashboardView};
use crate::render::display_id;

/// Which form an output or busy flag belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Predict,
    Feedback,
}

/// Named string values, as a submitted form exposes them
pub trait FieldSource {
    fn field(&self, name: &str) -> Option<String>;

    /// Missing fields read as `"null"`
    fn text(&self, name: &str) -> String {
        self.field(name).unwrap_or_else(|| "null".to_string())
    }

    fn number(&self, name: &str) -> JsNumber {
        JsNumber(coerce_number(self.field(name).as_deref()))
    }
}

impl FieldSource for web_sys::FormData {
    fn field(&self, name: &str) -> Option<String> {
        self.get(name).as_string()
    }
}

/// Form data of the form that fired `ev`
pub fn submitted_form_data(ev: &web_sys::SubmitEvent) -> Option<web_sys::FormData> {
    let form = ev.target()?.dyn_into::<web_sys::HtmlFormElement>().ok()?;
    web_sys::FormData::new_with_form(&form).ok()
}

/// Numeric coercion matching a browser's `Number(value)`.
///
/// Missing and blank values are 0, anything unparseable is NaN.
pub fn coerce_number(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    let s = raw.trim();

    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&s[2..], radix);
    }

    // Rejects the `inf`/`nan` spellings Rust would otherwise accept
    let decimal = s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !decimal {
        return f64::NAN;
    }

    s.parse().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
    })
    .unwrap_or(f64::NAN)
}

pub fn read_prediction(form: &impl FieldSource) -> PredictionRequest {
    PredictionRequest {
        account_id: form.text("account_id"),
        events_last_7d: form.number("events_last_7d"),
        active_minutes_last_7d: form.number("active_minutes_last_7d"),
        error_rate: form.number("error_rate"),
        feedback_count_last_30d: form.number("feedback_count_last_30d"),
    }
}

pub fn read_feedback(form: &impl FieldSource) -> FeedbackSubmission {
    FeedbackSubmission {
        user_id: form.text("user_id"),
        feature: form.text("feature"),
        sentiment: form.text("sentiment"),
        severity: form.text("severity"),
        message: form.text("message"),
    }
}

/// Post a prediction and return the response as indented JSON
pub async fn send_prediction(
    gateway: &ApiGateway,
    request: &PredictionRequest,
) -> ApiResult<String> {
    let response = gateway.predict(request).await?;
    serde_json::to_string_pretty(&response).map_err(|e| ApiError::Encode {
        path: "/api/predict".to_string(),
        message: e.to_string(),
    })
}

/// Post feedback and return the confirmation line
pub async fn send_feedback(
    gateway: &ApiGateway,
    submission: &FeedbackSubmission,
) -> ApiResult<String> {
    let saved = gateway.submit_feedback(submission).await?;

    match saved.id {
        Some(id) if !id.is_null() => Ok(format!("Saved feedback #{}", display_id(&id))),
        _ => Err(ApiError::Validation {
            path: "/api/feedback".to_string(),
            message: "response has no id".to_string(),
        }),
    }
}

pub async fn handle_prediction<V: DashboardView + ?Sized>(
    gateway: &ApiGateway,
    view: &V,
    request: PredictionRequest,
) {
    view.set_submitting(FormKind::Predict, true);
    let result = send_prediction(gateway, &request).await;
    view.set_submitting(FormKind::Predict, false);

    finish(gateway, view, FormKind::Predict, result).await;
}

pub async fn handle_feedback<V: DashboardView + ?Sized>(
    gateway: &ApiGateway,
    view: &V,
    submission: FeedbackSubmission,
) {
    view.set_submitting(FormKind::Feedback, true);
    let result = send_feedback(gateway, &submission).await;
    view.set_submitting(FormKind::Feedback, false);

    finish(gateway, view, FormKind::Feedback, result).await;
}

/// On success show the output and refresh; on failure keep the old output
async fn finish<V: DashboardView + ?Sized>(
    gateway: &ApiGateway,
    view: &V,
    form: FormKind,
    result: ApiResult<String>,
) {
    match result {
        Ok(text) => {
            view.show_output(form, text);
            refresh_into(gateway, view).await;
        }
        Err(e) => {
            log_error(&format!("Submission failed: {}", e));
            view.notify_error(e.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::testing::FakeServer;
    use crate::api::Method;
    use crate::dashboard::testing::{Event, RecordingView};
    use futures::executor::block_on;
    use serde_json::{json, Value};
    use std::collections::HashMap;

    struct Fields(HashMap<&'static str, &'static str>);

    impl FieldSource for Fields {
        fn field(&self, name: &str) -> Option<String> {
            self.0.get(name).map(|v| v.to_string())
        }
    }

    fn fields(pairs: &[(&'static str, &'static str)]) -> Fields {
        Fields(pairs.iter().copied().collect())
    }

    const METRICS: &str = r#"{"prediction_count":1,"feedback_total":1,"feedback_negative":0,
        "feedback_high_severity":0,"feedback_response_sla_hours":48}"#;

    fn live_server() -> std::rc::Rc<FakeServer> {
        let server = FakeServer::new();
        server.respond(Method::Get, "/api/metrics", 200, METRICS);
        server.respond(Method::Get, "/api/feedback", 200, "[]");
        server
    }

    fn posted_body(server: &FakeServer, url: &str) -> Value {
        let request = server
            .requests()
            .into_iter()
            .find(|r| r.method == Method::Post && r.url == url)
            .unwrap();
        serde_json::from_str(request.body.as_deref().unwrap()).unwrap()
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(None), 0.0);
        assert_eq!(coerce_number(Some("")), 0.0);
        assert_eq!(coerce_number(Some("   ")), 0.0);
        assert_eq!(coerce_number(Some(" 12 ")), 12.0);
        assert_eq!(coerce_number(Some("0.1")), 0.1);
        assert_eq!(coerce_number(Some(".5")), 0.5);
        assert_eq!(coerce_number(Some("1e3")), 1000.0);
        assert_eq!(coerce_number(Some("-4")), -4.0);
        assert_eq!(coerce_number(Some("0x1F")), 31.0);
        assert_eq!(coerce_number(Some("0b101")), 5.0);
        assert_eq!(coerce_number(Some("Infinity")), f64::INFINITY);
        assert_eq!(coerce_number(Some("-Infinity")), f64::NEG_INFINITY);
        assert!(coerce_number(Some("abc")).is_nan());
        assert!(coerce_number(Some("inf")).is_nan());
        assert!(coerce_number(Some("NaN")).is_nan());
        assert!(coerce_number(Some("12px")).is_nan());
        assert!(coerce_number(Some("0x")).is_nan());
        assert!(coerce_number(Some("-0x10")).is_nan());
    }

    #[test]
    fn test_prediction_posts_exact_body_then_refreshes() {
        let server = live_server();
        server.respond(
            Method::Post,
            "/api/predict",
            200,
            r#"{"account_id":"a1","risk_score":40}"#,
        );
        let view = RecordingView::default();

        let form = fields(&[
            ("account_id", "a1"),
            ("events_last_7d", "10"),
            ("active_minutes_last_7d", "5"),
            ("error_rate", "0.1"),
            ("feedback_count_last_30d", "2"),
        ]);
        block_on(handle_prediction(&server.gateway(), &view, read_prediction(&form)));

        assert_eq!(
            posted_body(&server, "/api/predict"),
            json!({
                "account_id": "a1",
                "events_last_7d": 10,
                "active_minutes_last_7d": 5,
                "error_rate": 0.1,
                "feedback_count_last_30d": 2,
            })
        );

        let urls: Vec<_> = server.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(urls, ["/api/predict", "/api/metrics", "/api/feedback"]);

        let events = view.events();
        assert_eq!(
            events[2],
            Event::Output(
                FormKind::Predict,
                "{\n  \"account_id\": \"a1\",\n  \"risk_score\": 40\n}".to_string()
            )
        );
        assert!(matches!(events.last(), Some(Event::Live(_))));
    }

    #[test]
    fn test_prediction_blank_and_garbage_numbers() {
        let form = fields(&[("account_id", "a1"), ("events_last_7d", ""), ("error_rate", "x")]);
        let request = read_prediction(&form);
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["events_last_7d"], 0);
        assert_eq!(body["active_minutes_last_7d"], 0);
        assert_eq!(body["error_rate"], Value::Null);
    }

    #[test]
    fn test_feedback_posts_body_and_shows_id() {
        let server = live_server();
        server.respond(
            Method::Post,
            "/api/feedback",
            201,
            r#"{"id":42,"user_id":"u1","feature":"f","sentiment":"positive",
                "severity":"low","message":"hi","created_at":"2026-10-18T09:00:00Z"}"#,
        );
        let view = RecordingView::default();

        let form = fields(&[
            ("user_id", "u1"),
            ("feature", "f"),
            ("sentiment", "positive"),
            ("severity", "low"),
            ("message", "hi"),
        ]);
        block_on(handle_feedback(&server.gateway(), &view, read_feedback(&form)));

        assert_eq!(
            posted_body(&server, "/api/feedback"),
            json!({
                "user_id": "u1",
                "feature": "f",
                "sentiment": "positive",
                "severity": "low",
                "message": "hi",
            })
        );
        assert!(view
            .events()
            .contains(&Event::Output(FormKind::Feedback, "Saved feedback #42".to_string())));

        let urls: Vec<_> = server.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(urls, ["/api/feedback", "/api/metrics", "/api/feedback"]);
    }

    #[test]
    fn test_feedback_string_id_is_shown_raw() {
        let server = live_server();
        server.respond(Method::Post, "/api/feedback", 201, r#"{"id":"3f9a1c2e"}"#);

        let submission = read_feedback(&fields(&[]));
        let text = block_on(send_feedback(&server.gateway(), &submission)).unwrap();
        assert_eq!(text, "Saved feedback #3f9a1c2e");
    }

    #[test]
    fn test_missing_fields_read_as_null_text() {
        let submission = read_feedback(&fields(&[("user_id", "u1")]));
        assert_eq!(submission.user_id, "u1");
        assert_eq!(submission.message, "null");
    }

    #[test]
    fn test_feedback_without_id_is_validation_error() {
        let server = live_server();
        server.respond(Method::Post, "/api/feedback", 201, r#"{"id":null}"#);

        let err = block_on(send_feedback(&server.gateway(), &read_feedback(&fields(&[]))))
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation { .. }));
    }

    #[test]
    fn test_failed_post_keeps_output_and_toasts() {
        let server = live_server();
        server.respond(Method::Post, "/api/predict", 422, "bad input");
        let view = RecordingView::default();

        block_on(handle_prediction(
            &server.gateway(),
            &view,
            read_prediction(&fields(&[])),
        ));

        assert_eq!(
            view.events(),
            [
                Event::Submitting(FormKind::Predict, true),
                Event::Submitting(FormKind::Predict, false),
                Event::Toast("/api/predict failed: bad input".to_string()),
            ]
        );
        assert_eq!(server.requests().len(), 1);
    }
}
