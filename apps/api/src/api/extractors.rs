use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
};
use serde::de::DeserializeOwned;
use serde_json::error::Category;

use crate::api::errors::ApiError;

/// JSON body extractor that rejects with the bind failure envelope
///
/// Usage:
/// ```rust,ignore
/// async fn handler(UserJson(draft): UserJson<UserDraft>) -> Result<..., ApiError> {
///     ...
/// }
/// ```
pub struct UserJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for UserJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Err(ApiError::bind(
                "request content type must be application/json",
            ));
        }

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::bind(e.body_text()))?;

        if body.is_empty() {
            return Err(ApiError::bind("body must not be empty"));
        }

        serde_json::from_slice(&body)
            .map(UserJson)
            .map_err(|e| ApiError::bind(describe(&e)))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

/// Human readable reason a body failed to decode
fn describe(err: &serde_json::Error) -> String {
    match err.classify() {
        Category::Syntax => format!(
            "body contains badly-formed JSON (at line {} column {})",
            err.line(),
            err.column()
        ),
        Category::Eof => "body contains badly-formed JSON".to_string(),
        Category::Data => format!("body contains incorrect JSON type: {}", err),
        Category::Io => err.to_string(),
    }
}
