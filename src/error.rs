//! Error types for the cars service
//!
//! Provides unified error handling using thiserror. Handlers are the only
//! place where these errors are turned into HTTP status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == App Error Enum ==
/// Unified error type shared by the store, the cache and the handlers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Record or cache key absent
    #[error("not found: {0}")]
    NotFound(String),

    /// Cache key present but past its expiry
    #[error("expired: {0}")]
    Expired(String),

    /// Underlying persistence failure
    #[error("store error: {0}")]
    Store(String),

    /// Malformed identifier or request body
    #[error("invalid request: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("no rows in result set".to_string()),
            other => AppError::Store(other.to_string()),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Store-level not-found on a record read is reported as a server error.
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) | AppError::Expired(_) | AppError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cars service.
pub type Result<T> = std::result::Result<T, AppError>;
