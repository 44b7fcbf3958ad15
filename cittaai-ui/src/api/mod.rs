//! API Layer
//!
//! Typed access to the dashboard's JSON API.

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::{ApiGateway, RequestOptions, API_BASE};
pub use error::{ApiError, ApiResult};
pub use transport::{FetchTransport, Method, RawResponse, Transport};
pub use types::{
    js_number_text, FeedbackEntry, FeedbackSubmission, HealthStatus, JsNumber, Metrics,
    Milestone, PredictionRequest, Roadmap, SavedFeedback,
};
