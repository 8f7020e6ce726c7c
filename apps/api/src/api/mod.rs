// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod state;

use axum::{
    routing::{delete, get},
    Router,
};

pub use errors::ApiError;
pub use response::ApiResponse;
pub use state::AppState;

use handlers::{health, users};

/// Builds the router for every user roster endpoint
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route(
            "/user",
            get(users::fetch_users)
                .post(users::create_user)
                .put(users::update_user),
        )
        .route("/user/:id", delete(users::delete_user))
        .with_state(state)
}
