//! API error types

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend rejected the credential. The session has already been cleared.
    #[error("Authentication failed")]
    Authentication,

    #[error("{message}")]
    Request { status: StatusCode, message: String },

    /// No response was obtained from the backend
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Unexpected payload from {endpoint}: {source}")]
    UnexpectedPayload {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize request body: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid request path {path}: {source}")]
    InvalidPath {
        path: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("HTTP client error: {0}")]
    Client(#[source] reqwest::Error),
}

impl ApiError {
    pub fn is_authentication(&self) -> bool {
        matches!(self, ApiError::Authentication)
    }

    /// HTTP status for failures that produced a response
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Authentication => Some(StatusCode::UNAUTHORIZED),
            ApiError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}
