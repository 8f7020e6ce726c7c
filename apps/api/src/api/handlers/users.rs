use axum::extract::{Path, State};
use serde::Serialize;

use crate::api::errors::ApiError;
use crate::api::extractors::UserJson;
use crate::api::response::ApiResponse;
use crate::api::state::AppState;
use crate::domain::user::{User, UserDraft};

/// Exported user as returned to API clients
///
/// The status is rendered as its letter code (`I`, `A`, `T`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub user_status: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            user_name: user.user_name().to_string(),
            first_name: user.first_name().to_string(),
            last_name: user.last_name().to_string(),
            email: user.email().to_string(),
            department: user.department().to_string(),
            user_status: user.status().code().to_string(),
        }
    }
}

/// Create a new user
///
/// POST /user
pub async fn create_user(
    State(state): State<AppState>,
    UserJson(draft): UserJson<UserDraft>,
) -> Result<ApiResponse<UserResponse>, ApiError> {
    let user = User::new(draft).map_err(|e| ApiError::validation(&e))?;

    let created = state
        .users
        .create(user)
        .await
        .map_err(|e| ApiError::persistence("save", e))?;

    Ok(ApiResponse::created(UserResponse::from(&created)))
}

/// Get every user
///
/// GET /user
pub async fn fetch_users(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<UserResponse>>, ApiError> {
    let users = state
        .users
        .fetch_all()
        .await
        .map_err(|e| ApiError::persistence("fetch all", e))?;

    let responses = users.iter().map(UserResponse::from).collect();

    Ok(ApiResponse::ok(responses))
}

/// Replace the fields of an existing user
///
/// PUT /user
pub async fn update_user(
    State(state): State<AppState>,
    UserJson(draft): UserJson<UserDraft>,
) -> Result<ApiResponse<UserResponse>, ApiError> {
    let user = User::existing(draft).map_err(|e| ApiError::validation(&e))?;

    let updated = state
        .users
        .update(user)
        .await
        .map_err(|e| ApiError::persistence("update", e))?;

    Ok(ApiResponse::ok(UserResponse::from(&updated)))
}

/// Delete a user; unknown ids succeed
///
/// DELETE /user/:id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    state
        .users
        .delete(&id)
        .await
        .map_err(|e| ApiError::persistence(&format!("delete {}", id), e))?;

    Ok(ApiResponse::ok(()))
}
