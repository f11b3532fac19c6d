//! REST helpers shared across suite clients.

mod endpoint;
mod transport;

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

pub use endpoint::Endpoint;
pub use reqwest::StatusCode;
pub use transport::{JSON_CONTENT_TYPE, JsonTransport, TransportSettings};

/// Shared REST result type.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("malformed response body: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("request body could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            ApiError::Transport(err) if err.is_timeout() => "TIMEOUT",
            ApiError::Transport(_) => "TRANSPORT",
            ApiError::Status(_) => "STATUS",
            ApiError::Decode(_) => "DECODE",
            ApiError::Encode(_) => "ENCODE",
        }
    }
}

/// What the user gets to see about a request. Every failure cause collapses
/// into [`Notification::Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Notification {
    Success,
    Error,
}

impl Notification {
    /// Collapse a request result, logging the cause before it is dropped.
    pub fn from_result<T>(action: &'static str, result: &ApiResult<T>) -> Self {
        match result {
            Ok(_) => Notification::Success,
            Err(err) => {
                warn!(action, code = err.code(), error = %err, "request failed");
                Notification::Error
            }
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Notification::Success => "success",
            Notification::Error => "error",
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Notification::Success)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
