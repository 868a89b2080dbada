//! Error types for the tool server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Server Error Enum ==
/// Unified error type for the tool server.
///
/// Every variant carries a stable protocol error code (see [`ServerError::code`])
/// that is returned alongside the message in error responses.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Package name failed validation
    #[error("{0}")]
    InvalidPackageName(String),

    /// Version string failed validation
    #[error("{0}")]
    InvalidVersion(String),

    /// Search query failed validation
    #[error("{0}")]
    InvalidSearchQuery(String),

    /// Result limit out of range
    #[error("{0}")]
    InvalidLimit(String),

    /// Quality/popularity score out of range
    #[error("{0}")]
    InvalidScore(String),

    /// Tool arguments did not match the declared input shape
    #[error("Invalid arguments: {0}")]
    InvalidParams(String),

    /// Package does not exist in the registry
    #[error("Package '{0}' not found")]
    PackageNotFound(String),

    /// Requested version does not exist for the package
    #[error("Version '{version}' of package '{package}' not found")]
    VersionNotFound { package: String, version: String },

    /// No tool registered under the requested name
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Upstream service rejected the request due to rate limiting
    #[error("Rate limit exceeded for {0}")]
    RateLimited(String),

    /// Upstream request failed or timed out
    #[error("Network error: {0}")]
    Network(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServerError {
    // == Protocol Error Code ==
    /// Stable protocol-level error code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            ServerError::InvalidPackageName(_) => "INVALID_PACKAGE_NAME",
            ServerError::InvalidVersion(_) => "INVALID_VERSION",
            ServerError::InvalidSearchQuery(_) => "INVALID_SEARCH_QUERY",
            ServerError::InvalidLimit(_) => "INVALID_LIMIT",
            ServerError::InvalidScore(_) => "INVALID_SCORE",
            ServerError::InvalidParams(_) => "INVALID_PARAMS",
            ServerError::PackageNotFound(_) => "PACKAGE_NOT_FOUND",
            ServerError::VersionNotFound { .. } => "VERSION_NOT_FOUND",
            ServerError::UnknownTool(_) => "UNKNOWN_TOOL",
            ServerError::RateLimited(_) => "RATE_LIMIT_EXCEEDED",
            ServerError::Network(_) => "NETWORK_ERROR",
            ServerError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ServerError::InvalidPackageName(_)
            | ServerError::InvalidVersion(_)
            | ServerError::InvalidSearchQuery(_)
            | ServerError::InvalidLimit(_)
            | ServerError::InvalidScore(_)
            | ServerError::InvalidParams(_) => StatusCode::BAD_REQUEST,
            ServerError::PackageNotFound(_)
            | ServerError::VersionNotFound { .. }
            | ServerError::UnknownTool(_) => StatusCode::NOT_FOUND,
            ServerError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            ServerError::Network(_) => StatusCode::BAD_GATEWAY,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.to_string(),
            "code": self.code(),
        }));

        (self.status(), body).into_response()
    }
}

// == Conversions ==
impl From<reqwest::Error> for ServerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ServerError::Network(format!("request timed out: {err}"))
        } else {
            ServerError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(err: serde_json::Error) -> Self {
        ServerError::Internal(err.to_string())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the tool server.
pub type Result<T> = std::result::Result<T, ServerError>;
