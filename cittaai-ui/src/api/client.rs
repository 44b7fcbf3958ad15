//! HTTP API Client
//!
//! Functions for communicating with the CittaAI REST API.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::error::Category;
use std::rc::Rc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::transport::{FetchTransport, Method, Transport};
use crate::api::types::{
    FeedbackEntry, FeedbackSubmission, HealthStatus, Metrics, PredictionRequest, Roadmap,
    SavedFeedback,
};

/// API base; empty means the page's own origin
pub const API_BASE: &str = "";

/// Method and optional JSON body for one request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post_json<B: Serialize>(path: &str, body: &B) -> ApiResult<Self> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Encode {
            path: path.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            method: Method::Post,
            body: Some(body),
        })
    }
}

/// Gateway to the dashboard API. Each call makes exactly one attempt.
#[derive(Clone)]
pub struct ApiGateway {
    base: String,
    transport: Rc<dyn Transport>,
}

impl ApiGateway {
    pub fn new(base: impl Into<String>, transport: Rc<dyn Transport>) -> Self {
        Self {
            base: base.into(),
            transport,
        }
    }

    /// Gateway using the browser's fetch against the page origin
    pub fn browser() -> Self {
        Self::new(API_BASE, Rc::new(FetchTransport))
    }

    /// Send a request and decode the JSON response
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> ApiResult<T> {
        let url = format!("{}{}", self.base, path);
        let response = self
            .transport
            .send(options.method, &url, path, options.body)
            .await?;

        if !response.ok() {
            return Err(ApiError::Request {
                path: path.to_string(),
                status: response.status,
                body: response.body,
            });
        }

        decode(path, &response.body)
    }

    pub async fn health(&self) -> ApiResult<HealthStatus> {
        self.request("/api/health", RequestOptions::get()).await
    }

    pub async fn roadmap(&self) -> ApiResult<Roadmap> {
        self.request("/api/roadmap", RequestOptions::get()).await
    }

    pub async fn metrics(&self) -> ApiResult<Metrics> {
        self.request("/api/metrics", RequestOptions::get()).await
    }

    /// Feedback list; a `null` body is treated as empty
    pub async fn feedback(&self) -> ApiResult<Vec<FeedbackEntry>> {
        let rows: Option<Vec<FeedbackEntry>> =
            self.request("/api/feedback", RequestOptions::get()).await?;
        Ok(rows.unwrap_or_default())
    }

    /// Score an account; the response is kept as raw JSON for display
    pub async fn predict(&self, payload: &PredictionRequest) -> ApiResult<serde_json::Value> {
        let path = "/api/predict";
        self.request(path, RequestOptions::post_json(path, payload)?).await
    }

    pub async fn submit_feedback(&self, payload: &FeedbackSubmission) -> ApiResult<SavedFeedback> {
        let path = "/api/feedback";
        self.request(path, RequestOptions::post_json(path, payload)?).await
    }
}

/// Syntax errors are `Parse`, shape mismatches are `Validation`
fn decode<T: DeserializeOwned>(path: &str, body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|e| {
        let message = e.to_string();
        let path = path.to_string();
        match e.classify() {
            Category::Data => ApiError::Validation { path, message },
            _ => ApiError::Parse { path, message },
        }
    })
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory transport used by the client-side tests

    use super::*;
    use crate::api::transport::RawResponse;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// A request as seen by the fake server
    #[derive(Debug, Clone, PartialEq)]
    pub struct Recorded {
        pub method: Method,
        pub url: String,
        pub body: Option<String>,
    }

    /// Canned responses keyed by `(method, url)`; unknown routes are 404
    #[derive(Default)]
    pub struct FakeServer {
        routes: RefCell<HashMap<(Method, String), RawResponse>>,
        pub requests: RefCell<Vec<Recorded>>,
    }

    impl FakeServer {
        pub fn new() -> Rc<Self> {
            Rc::new(Self::default())
        }

        pub fn respond(&self, method: Method, url: &str, status: u16, body: &str) {
            self.routes
                .borrow_mut()
                .insert((method, url.to_string()), RawResponse::new(status, body));
        }

        pub fn gateway(self: &Rc<Self>) -> ApiGateway {
            ApiGateway::new(API_BASE, self.clone())
        }

        pub fn requests(&self) -> Vec<Recorded> {
            self.requests.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl Transport for FakeServer {
        async fn send(
            &self,
            method: Method,
            url: &str,
            _path: &str,
            body: Option<String>,
        ) -> ApiResult<RawResponse> {
            self.requests.borrow_mut().push(Recorded {
                method,
                url: url.to_string(),
                body,
            });

            Ok(self
                .routes
                .borrow()
                .get(&(method, url.to_string()))
                .cloned()
                .unwrap_or_else(|| RawResponse::new(404, "Not Found")))
        }
    }
}
