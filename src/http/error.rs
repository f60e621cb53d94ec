//! HTTP error handling and response types.
//!
//! This is the only layer that turns outcomes into status codes, and the
//! only layer allowed to swallow an error instead of propagating it:
//! backend failures are logged here and answered with an opaque body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db::repository::RepositoryError;

/// Error response body for client-fault statuses (400/404).
///
/// The message is derived from client input only; internal error text never
/// goes through this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found
    NotFound(String),
    /// Invalid request (validation error)
    BadRequest(String),
    /// Internal server error
    Internal(String),
    /// Repository error
    Repository(RepositoryError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                Json(ApiError::new("NOT_FOUND", msg)),
            )
                .into_response(),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ApiError::new("BAD_REQUEST", msg)),
            )
                .into_response(),
            // Anything below is a server fault. Log the detail, answer with
            // an empty JSON object so internal error text never reaches the
            // client.
            AppError::Repository(e) => {
                tracing::error!(error = %e, "repository operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(serde_json::json!({}))).into_response()
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(serde_json::json!({}))).into_response()
            }
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}
