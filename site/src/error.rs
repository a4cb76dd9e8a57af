//! Unified error types for the site
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic and persistence errors
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::ValidationError;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Entity already exists: {0}")]
    AlreadyExists(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Domain(DomainError::Validation(e))
    }
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(DomainError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, "Not found", Some(msg.clone()))
            }
            AppError::Domain(DomainError::AlreadyExists(msg)) => {
                (StatusCode::CONFLICT, "Already exists", Some(msg.clone()))
            }
            AppError::Domain(DomainError::Validation(e)) => {
                let status = match e {
                    ValidationError::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
                    ValidationError::SingletonViolation => StatusCode::CONFLICT,
                    _ => StatusCode::BAD_REQUEST,
                };
                (status, "Validation error", Some(e.to_string()))
            }
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Domain(DomainError::Storage(msg)) => {
                tracing::error!("Storage error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
