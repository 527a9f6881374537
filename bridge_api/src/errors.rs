//! Error types for the API client.

use std::fmt;

use serde_json::Value;

/// Title carried by [`Error::Request`] when the response body is not JSON.
pub const REQUEST_ERROR_TITLE: &str = "Request occurred an error.";

/// Code carried by [`Error::Request`] when the response body is not JSON.
pub const REQUEST_ERROR_CODE: &str = "request_error";

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The response body could not be decoded as JSON.
    #[error("{title} ({code}): {message}")]
    Request {
        /// Raw response text.
        message: String,
        title: String,
        code: String,
    },
    /// The API answered with an error object (a body carrying a `type` field).
    #[error("API error: {0}")]
    Api(ApiError),
    /// Timeout, connection failure, or any other transport error.
    #[error("Network error")]
    Network(#[from] reqwest::Error),
    /// The API root and request path could not be joined into a URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    pub(crate) fn undecodable(text: &str) -> Self {
        Error::Request {
            message: text.to_string(),
            title: REQUEST_ERROR_TITLE.to_string(),
            code: REQUEST_ERROR_CODE.to_string(),
        }
    }

    /// Returns the decoded error object if this is an API error.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

/// Error object returned by the API, kept exactly as decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    body: Value,
}

impl ApiError {
    pub(crate) fn new(body: Value) -> Self {
        Self { body }
    }

    /// The `type` field, e.g. `invalid_request`.
    pub fn kind(&self) -> Option<&str> {
        self.body.get("type").and_then(Value::as_str)
    }

    /// The human readable `message` field, when present.
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn into_body(self) -> Value {
        self.body
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind(), self.message()) {
            (Some(kind), Some(message)) => write!(f, "{}: {}", kind, message),
            (Some(kind), None) => write!(f, "{}", kind),
            _ => write!(f, "{}", self.body),
        }
    }
}
