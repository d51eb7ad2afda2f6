//! Error types for the video proxy
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Proxy Error Enum ==
/// Unified error type for the video proxy.
///
/// The service operations themselves never fail; errors only come from
/// input handling at the edges.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProxyError {
    /// Malformed request data (e.g. a non-numeric video id)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Unrecognised info cache policy name
    #[error("Unknown info cache policy: {0}")]
    UnknownPolicy(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProxyError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::UnknownPolicy(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the video proxy.
pub type Result<T> = std::result::Result<T, ProxyError>;
