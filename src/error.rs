//! Error types and their HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed payload or missing required field
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("gopher '{0}' not found")]
    NotFound(String),

    /// Duplicate id on create
    #[error("gopher '{0}' already exists")]
    Conflict(String),

    /// Request body over the size limit
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation_error",
            AppError::NotFound(_) => "not_found",
            AppError::Conflict(_) => "conflict",
            AppError::PayloadTooLarge(_) => "payload_too_large",
            AppError::Config(_) | AppError::Internal(_) => "internal_error",
        }
    }
}

/// Error body returned to clients
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error code: validation_error, not_found, conflict, payload_too_large or internal_error
    #[schema(example = "not_found")]
    pub error: String,
    #[schema(example = "gopher '1' not found")]
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Internal details stay in the logs.
        let message = match &self {
            AppError::Config(_) | AppError::Internal(_) => {
                tracing::error!(error = %self, "Request failed with internal error");
                "internal server error".to_string()
            }
            _ => self.to_string(),
        };

        let body = ErrorResponse {
            error: self.code().to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
