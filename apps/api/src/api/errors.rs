use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

use crate::api::response::status_text;
use crate::domain::repositories::PersistenceError;
use crate::domain::user::ValidationError;

/// API error rendered as the failure envelope
///
/// ```json
/// {"message": "failed to <operation> user", "errors": "...", "status": "Bad Request"}
/// ```
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub errors: String,
}

impl ApiError {
    /// Creates a new API error for a failed operation on a user
    pub fn new(status: StatusCode, operation: &str, errors: impl fmt::Display) -> Self {
        Self {
            status,
            message: format!("failed to {} user", operation),
            errors: errors.to_string(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(operation: &str, errors: impl fmt::Display) -> Self {
        Self::new(StatusCode::BAD_REQUEST, operation, errors)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(operation: &str, errors: impl fmt::Display) -> Self {
        Self::new(StatusCode::NOT_FOUND, operation, errors)
    }

    /// Creates a 409 Conflict error
    pub fn conflict(operation: &str, errors: impl fmt::Display) -> Self {
        Self::new(StatusCode::CONFLICT, operation, errors)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(operation: &str, errors: impl fmt::Display) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, operation, errors)
    }

    /// Request body could not be decoded
    pub fn bind(errors: impl fmt::Display) -> Self {
        Self::bad_request("bind", errors)
    }

    /// Decoded user failed validation
    pub fn validation(err: &ValidationError) -> Self {
        tracing::warn!(field = err.field, error = %err, "user failed validation");
        Self::bad_request("validation", err)
    }

    /// Repository failure while performing `operation`
    pub fn persistence(operation: &str, err: PersistenceError) -> Self {
        match &err {
            PersistenceError::NotFound(_) => {
                tracing::warn!(error = %err, "user not found");
                Self::not_found(operation, err)
            }
            PersistenceError::Conflict { .. } => {
                tracing::warn!(error = %err, "user conflicts with stored data");
                Self::conflict(operation, err)
            }
            PersistenceError::Storage { .. } => {
                tracing::error!(error = %err, "user storage failure");
                Self::internal_server_error(operation, err)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "message": self.message,
            "errors": self.errors,
            "status": status_text(self.status),
        }));

        (self.status, body).into_response()
    }
}
