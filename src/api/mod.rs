//! CittaAI REST API
//!
//! HTTP API layer for the beta dashboard, built with Axum.
//!
//! # Endpoints
//!
//! - `GET /api/health` - Service status
//! - `GET /api/roadmap` - Beta roadmap and milestones
//! - `GET /api/metrics` - Prediction and feedback counters
//! - `GET /api/feedback` - Feedback log, newest first
//! - `POST /api/feedback` - Record feedback
//! - `POST /api/predict` - Score an account's churn risk
//! - `GET /health/live` - Liveness probe
//!
//! Other `/api/*` paths answer with a JSON 404.
//! Every other path is served from the built dashboard directory, so the
//! dashboard and the API share one origin.
//!
//! # Example
//!
//! ```rust,ignore
//! use cittaai::api::{serve, AppState};
//! use cittaai::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let state = AppState::open(config.clone()).await?;
//!     serve(state, &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let static_dir = Path::new(&state.config.server.static_dir).to_path_buf();
    let cors = cors_layer(&state.config.server.cors_origins);

    let api_routes = Router::new()
        .route("/health", get(routes::health::api_health))
        .route("/roadmap", get(routes::roadmap::get_roadmap))
        .route("/metrics", get(routes::metrics::get_metrics))
        .route(
            "/feedback",
            get(routes::feedback::list_feedback).post(routes::feedback::submit_feedback),
        )
        .route("/predict", post(routes::predict::predict))
        .fallback(routes::health::api_not_found);

    let health_routes = Router::new().route("/live", get(routes::health::liveness));

    // Unknown paths fall through to the dashboard bundle
    let dashboard =
        ServeDir::new(&static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api", api_routes)
        .nest("/health", health_routes)
        .fallback_service(dashboard)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Permissive when no origins are configured, otherwise an allow-list
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("CittaAI API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("CittaAI API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    async fn create_test_app() -> (Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let mut config = Config::default();
        config.store.data_dir = dir.path().join("data").to_string_lossy().to_string();
        config.server.static_dir = dir.path().join("dist").to_string_lossy().to_string();

        let state = AppState::open(config).await.unwrap();
        let router = build_router(state);

        (router, dir)
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn feedback_payload(user: &str, sentiment: &str, severity: &str) -> Value {
        json!({
            "user_id": user,
            "feature": "insight_dashboard",
            "sentiment": sentiment,
            "severity": severity,
            "message": "Test feedback",
        })
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app().await;
        let response = app.oneshot(get("/health/live")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_api_health() {
        let (app, _dir) = create_test_app().await;
        let (status, body) = send(&app, get("/api/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "cittaai-phase1-beta");
    }

    #[tokio::test]
    async fn test_roadmap_is_seeded() {
        let (app, dir) = create_test_app().await;
        let (status, body) = send(&app, get("/api/roadmap")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["project"], "CittaAI Phase 1 Beta MVP");
        assert!(body["betaFocus"].is_string());
        assert_eq!(body["milestones"].as_array().unwrap().len(), 3);
        assert!(dir.path().join("data").join("roadmap.json").exists());
    }

    #[tokio::test]
    async fn test_predict() {
        let (app, _dir) = create_test_app().await;
        let payload = json!({
            "account_id": "acct_1",
            "events_last_7d": 7,
            "active_minutes_last_7d": 84,
            "error_rate": 0.12,
            "feedback_count_last_30d": 3,
        });

        let (status, body) = send(&app, post_json("/api/predict", payload)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["account_id"], "acct_1");
        let score = body["risk_score"].as_u64().unwrap();
        assert!(score <= 100);
        assert_eq!(body["priority_band"], "medium");
    }

    #[tokio::test]
    async fn test_predict_rejects_invalid_payload() {
        let (app, _dir) = create_test_app().await;
        let payload = json!({
            "account_id": "a1",
            "events_last_7d": null,
            "active_minutes_last_7d": 5,
            "error_rate": 0.1,
            "feedback_count_last_30d": 2,
        });

        let (status, body) = send(&app, post_json("/api/predict", payload)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_predict_invalid_json() {
        let (app, _dir) = create_test_app().await;
        let request = Request::builder()
            .method("POST")
            .uri("/api/predict")
            .header("Content-Type", "application/json")
            .body(Body::from("not json"))
            .unwrap();

        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_feedback_missing_field_uses_error_body() {
        let (app, _dir) = create_test_app().await;
        let payload = json!({
            "user_id": "u1",
            "feature": "insight_dashboard",
            "sentiment": "positive",
            "severity": "low",
        });

        let (status, body) = send(&app, post_json("/api/feedback", payload)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("message"));
    }

    #[tokio::test]
    async fn test_predict_wrong_type_uses_error_body() {
        let (app, _dir) = create_test_app().await;
        let payload = json!({
            "account_id": 7,
            "events_last_7d": 1,
            "active_minutes_last_7d": 5,
            "error_rate": 0.1,
            "feedback_count_last_30d": 2,
        });

        let (status, body) = send(&app, post_json("/api/predict", payload)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("account_id"));
    }

    #[tokio::test]
    async fn test_unknown_api_path_is_json_404() {
        let (app, dir) = create_test_app().await;
        let dist = dir.path().join("dist");
        std::fs::create_dir_all(&dist).unwrap();
        std::fs::write(dist.join("index.html"), "<div id=\"app\"></div>").unwrap();

        let (status, body) = send(&app, get("/api/nope")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_feedback_roundtrip() {
        let (app, _dir) = create_test_app().await;

        let (status, created) = send(
            &app,
            post_json("/api/feedback", feedback_payload("u_test", "positive", "low")),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"].as_str().unwrap().len(), 8);
        assert!(created["created_at"].is_string());

        let (status, rows) = send(&app, get("/api/feedback")).await;
        assert_eq!(status, StatusCode::OK);
        let rows = rows.as_array().unwrap();
        assert_eq!(rows[0]["id"], created["id"]);
        assert!(rows.iter().any(|r| r["user_id"] == "u_test"));
    }

    #[tokio::test]
    async fn test_feedback_validation_error() {
        let (app, _dir) = create_test_app().await;
        let (status, body) = send(
            &app,
            post_json("/api/feedback", feedback_payload("u1", "thrilled", "low")),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("sentiment"));
    }

    #[tokio::test]
    async fn test_metrics_track_predictions_and_feedback() {
        let (app, _dir) = create_test_app().await;

        let (_, before) = send(&app, get("/api/metrics")).await;
        assert_eq!(before["prediction_count"], 0);
        assert_eq!(before["feedback_total"], 0);
        assert_eq!(before["feedback_response_sla_hours"], 48);

        let payload = json!({
            "account_id": "acct_2",
            "events_last_7d": 1,
            "active_minutes_last_7d": 10,
            "error_rate": 0.5,
            "feedback_count_last_30d": 0,
        });
        send(&app, post_json("/api/predict", payload)).await;
        send(
            &app,
            post_json("/api/feedback", feedback_payload("u_a", "negative", "high")),
        )
        .await;
        send(
            &app,
            post_json("/api/feedback", feedback_payload("u_b", "negative", "low")),
        )
        .await;

        let (status, after) = send(&app, get("/api/metrics")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(after["prediction_count"], 1);
        assert_eq!(after["feedback_total"], 2);
        assert_eq!(after["feedback_negative"], 2);
        assert_eq!(after["feedback_high_severity"], 1);
    }

    #[tokio::test]
    async fn test_dashboard_is_served_from_static_dir() {
        let (app, dir) = create_test_app().await;
        let dist = dir.path().join("dist");
        std::fs::create_dir_all(&dist).unwrap();
        std::fs::write(dist.join("index.html"), "<div id=\"app\"></div>").unwrap();

        let response = app.clone().oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // Unknown paths fall back to index.html
        let response = app.oneshot(get("/anything")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("id=\"app\""));
    }
}
