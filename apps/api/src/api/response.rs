use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Message carried by every successful response
pub const SUCCESSFUL: &str = "successful";

/// Canonical reason phrase of a status code, e.g. "Bad Request"
pub(crate) fn status_text(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Unknown")
}

/// Success envelope wrapping the response payload
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub status: StatusCode,
    pub data: T,
}

#[derive(Serialize)]
struct Envelope<'a, T> {
    message: &'static str,
    data: &'a T,
    status: &'static str,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 OK
    pub fn ok(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            data,
        }
    }

    /// 201 Created
    pub fn created(data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let body = Json(Envelope {
            message: SUCCESSFUL,
            data: &self.data,
            status: status_text(self.status),
        });

        (self.status, body).into_response()
    }
}
