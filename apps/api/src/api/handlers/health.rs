use axum::Json;
use serde_json::{json, Value};

/// Root greeting
///
/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "server running successfully" }))
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
