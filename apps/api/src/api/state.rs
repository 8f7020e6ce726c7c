use std::sync::Arc;
use std::time::Duration;

use crate::domain::repositories::UserRepository;
use crate::infrastructure::repositories::{TimeoutUserRepository, DEFAULT_REQUEST_TIMEOUT};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    /// Wraps `users` so each storage call is bounded by the default deadline
    pub fn new(users: impl UserRepository + 'static) -> Self {
        Self::with_request_timeout(users, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Wraps `users` so each storage call is bounded by `deadline`
    pub fn with_request_timeout(users: impl UserRepository + 'static, deadline: Duration) -> Self {
        Self {
            users: Arc::new(TimeoutUserRepository::new(users, deadline)),
        }
    }
}
