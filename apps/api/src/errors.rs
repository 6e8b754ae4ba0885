use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Upstream diagnostics are logged by the handler that produced the error;
/// this type only decides what the caller gets to see.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request itself is unusable (missing upload, broken multipart body).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The model answered, but not in the shape the route requires.
    #[error("Upstream content error: {message}")]
    UpstreamContent { message: String, raw_output: Value },

    /// The upstream call failed. `details` is forwarded to the caller only
    /// when the route exposes provider diagnostics.
    #[error("Upstream error: {message}")]
    Upstream {
        message: String,
        details: Option<Value>,
    },
}

impl AppError {
    pub fn upstream(message: &str) -> Self {
        AppError::Upstream {
            message: message.to_string(),
            details: None,
        }
    }

    pub fn upstream_with_details(message: &str, details: Value) -> Self {
        AppError::Upstream {
            message: message.to_string(),
            details: Some(details),
        }
    }

    pub fn content(message: &str, raw_output: Value) -> Self {
        AppError::UpstreamContent {
            message: message.to_string(),
            raw_output,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, json!({ "error": message })),
            AppError::UpstreamContent {
                message,
                raw_output,
            } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": message, "raw_output": raw_output }),
            ),
            AppError::Upstream {
                message,
                details: Some(details),
            } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": message, "details": details }),
            ),
            AppError::Upstream {
                message,
                details: None,
            } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": message }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
