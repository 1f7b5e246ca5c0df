// SPDX-License-Identifier: MIT

//! Application error types with consistent API responses.
//!
//! Every service operation converts internal failures into one of these
//! variants at its own boundary; nothing else crosses into the HTTP layer.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Duplicate value for unique field: {field}")]
    DuplicateKey { field: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON error response body.
///
/// The same envelope is used for every endpoint. The upstream service this
/// replaces had two envelope shapes; normalizing to one is deliberate.
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message, details) = match &self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Validation failed".to_string(),
                Some(msg.clone()),
            ),
            AppError::UserNotFound => (
                StatusCode::NOT_FOUND,
                "USER_NOT_FOUND",
                "User not found".to_string(),
                None,
            ),
            AppError::NotFound(what) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{} not found", what),
                None,
            ),
            AppError::DuplicateKey { field } => (
                StatusCode::CONFLICT,
                "DUPLICATE_KEY",
                format!("User with this {} already exists", field),
                None,
            ),
            AppError::Database(msg) => {
                tracing::error!(error = %msg, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SERVER_ERROR",
                    "Internal server error".to_string(),
                    Some(msg.clone()),
                )
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SERVER_ERROR",
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = ErrorResponse {
            success: false,
            error: error.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Malformed or missing JSON bodies surface as validation failures in the
/// same envelope instead of axum's default rejection body.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
