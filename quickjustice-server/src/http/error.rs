//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Storage failures are logged and reported without their details.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::{DbError, Resource};
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: Resource },

    /// Unique constraint violated (409)
    Conflict { resource: Resource },

    /// Database error (500, logged)
    Database(DbError),
}

impl ApiError {
    fn conflict_message(resource: Resource) -> String {
        match resource {
            Resource::Client => "Client with this document already exists".to_owned(),
            Resource::Lawyer => "Lawyer with this email already exists".to_owned(),
            // Primary key collisions or unique indexes added to the
            // provisioned schema on cases/receipts.
            other => format!("{} already exists", other.label()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "validation_error",
                    "message": e.to_string()
                }),
            ),
            Self::NotFound { resource } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": format!("{} not found", resource.label())
                }),
            ),
            Self::Conflict { resource } => (
                StatusCode::CONFLICT,
                json!({
                    "error": "conflict",
                    "message": Self::conflict_message(*resource)
                }),
            ),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": "an internal error occurred"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, .. } => Self::NotFound { resource },
            DbError::MissingReference { resource, .. } => Self::NotFound { resource },
            DbError::Conflict { resource, .. } => Self::Conflict { resource },
            DbError::Sqlx(_) => Self::Database(e),
        }
    }
}
