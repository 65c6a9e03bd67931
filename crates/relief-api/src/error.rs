//! Error types for API operations.
//!
//! Transport failures, undecodable bodies and application-level rejections
//! are distinct variants so callers can match on the category instead of
//! inspecting message text.

use serde_json::Value;
use thiserror::Error;

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Message used when an error response carries no usable `message` field.
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred";

/// Errors returned by the API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with an error status.
    ///
    /// `message` is the body's `message` field, or
    /// [`FALLBACK_ERROR_MESSAGE`] when absent.
    #[error("{message}")]
    Request {
        /// HTTP status code
        status: u16,
        /// Message reported by the backend
        message: String,
    },

    /// The response body was not JSON, or not the JSON the caller asked for.
    #[error("Invalid response body (status {status}): {source}")]
    Decode {
        /// HTTP status code of the response
        status: u16,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// The request payload could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Base URL and endpoint did not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Coarse category of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Nothing usable came back: connection, DNS, timeout, bad URL.
    Transport,
    /// A response arrived but could not be read or written as JSON.
    Decode,
    /// The backend rejected the request with a structured message.
    Application,
}

impl ApiError {
    /// Category of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Request { .. } => ErrorKind::Application,
            Self::Decode { .. } | Self::Encode(_) => ErrorKind::Decode,
            Self::Network(_) | Self::InvalidUrl(_) => ErrorKind::Transport,
        }
    }

    /// HTTP status of the response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } | Self::Decode { status, .. } => Some(*status),
            Self::Network(err) => err.status().map(|s| s.as_u16()),
            Self::Encode(_) | Self::InvalidUrl(_) => None,
        }
    }

    /// Build the application-level error for an error response body.
    pub(crate) fn from_error_body(status: u16, body: &Value) -> Self {
        Self::Request {
            status,
            message: error_message(body),
        }
    }
}

/// Pick the message out of an error body.
///
/// Empty strings, `null`, `false` and `0` count as absent; other scalars are
/// rendered as text.
fn error_message(body: &Value) -> String {
    match body.get("message") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Bool(true)) => "true".to_string(),
        Some(Value::Number(n)) if n.as_f64().is_some_and(|v| v != 0.0) => n.to_string(),
        Some(value @ (Value::Array(_) | Value::Object(_))) => value.to_string(),
        _ => FALLBACK_ERROR_MESSAGE.to_string(),
    }
}
