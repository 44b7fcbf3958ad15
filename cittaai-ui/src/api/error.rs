//! Client error types
//!
//! Every gateway call fails with exactly one of these. Only `Request`
//! carries an HTTP status; the others cover the transport and the body.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The fetch itself was rejected (offline, CORS, aborted)
    #[error("{path} unreachable: {message}")]
    Network { path: String, message: String },

    /// Non-2xx response; `body` is the response text verbatim
    #[error("{path} failed: {body}")]
    Request {
        path: String,
        status: u16,
        body: String,
    },

    /// 2xx response whose body is not JSON
    #[error("{path} returned invalid JSON: {message}")]
    Parse { path: String, message: String },

    /// 2xx JSON response that does not match the expected shape
    #[error("{path} returned an unexpected payload: {message}")]
    Validation { path: String, message: String },

    /// Request payload could not be encoded
    #[error("{path} payload could not be encoded: {message}")]
    Encode { path: String, message: String },
}

impl ApiError {
    pub fn path(&self) -> &str {
        match self {
            ApiError::Network { path, .. }
            | ApiError::Request { path, .. }
            | ApiError::Parse { path, .. }
            | ApiError::Validation { path, .. }
            | ApiError::Encode { path, .. } => path,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
