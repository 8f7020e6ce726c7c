use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::repositories::{PersistenceError, PersistenceResult, UserRepository};
use crate::domain::user::User;

/// In-memory implementation of UserRepository (for development/testing)
///
/// Ids are generated on create, as the PostgreSQL column default does.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<BTreeMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> PersistenceResult<User> {
        let mut users = self.users.write().await;

        let user = user.with_id(Uuid::new_v4().to_string());
        users.insert(user.id().to_string(), user.clone());

        tracing::info!(user_id = %user.id(), "user created");
        Ok(user)
    }

    async fn update(&self, user: User) -> PersistenceResult<User> {
        let mut users = self.users.write().await;

        if !users.contains_key(user.id()) {
            return Err(PersistenceError::NotFound(user.id().to_string()));
        }

        users.insert(user.id().to_string(), user.clone());

        tracing::info!(user_id = %user.id(), "user updated");
        Ok(user)
    }

    async fn fetch_all(&self) -> PersistenceResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn delete(&self, id: &str) -> PersistenceResult<()> {
        let mut users = self.users.write().await;

        if users.remove(id).is_some() {
            tracing::info!(user_id = %id, "user deleted");
        }

        Ok(())
    }
}
