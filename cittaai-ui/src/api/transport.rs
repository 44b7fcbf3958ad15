//! HTTP transport
//!
//! The gateway talks to the network through [`Transport`] so the fetch
//! flows can run against an in-memory server in tests.

use async_trait::async_trait;
use gloo_net::http::Request;

use crate::api::error::{ApiError, ApiResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
}

/// Status and body text of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait Transport {
    /// Perform one request. `path` is only used for error reporting.
    async fn send(
        &self,
        method: Method,
        url: &str,
        path: &str,
        body: Option<String>,
    ) -> ApiResult<RawResponse>;
}

/// Browser `fetch` via gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(
        &self,
        method: Method,
        url: &str,
        path: &str,
        body: Option<String>,
    ) -> ApiResult<RawResponse> {
        let network = |e: gloo_net::Error| ApiError::Network {
            path: path.to_string(),
            message: e.to_string(),
        };

        let response = match (method, body) {
            (Method::Get, _) => Request::get(url).send().await.map_err(network)?,
            (Method::Post, Some(body)) => Request::post(url)
                .header("Content-Type", "application/json")
                .body(body)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?,
            (Method::Post, None) => Request::post(url).send().await.map_err(network)?,
        };

        let status = response.status();
        let body = response.text().await.map_err(network)?;

        Ok(RawResponse { status, body })
    }
}
