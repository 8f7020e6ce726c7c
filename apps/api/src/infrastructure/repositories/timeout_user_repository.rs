use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;

use crate::domain::repositories::{
    PersistenceError, PersistenceKind, PersistenceResult, UserRepository,
};
use crate::domain::user::User;

/// Deadline applied to each storage call when none is configured
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Bounds every call of the wrapped repository by a deadline
///
/// A call that outlives the deadline is dropped and reported as a
/// [`PersistenceError::Storage`] failure for its operation.
#[derive(Debug, Clone)]
pub struct TimeoutUserRepository<R> {
    inner: R,
    deadline: Duration,
}

impl<R: UserRepository> TimeoutUserRepository<R> {
    pub fn new(inner: R, deadline: Duration) -> Self {
        Self { inner, deadline }
    }

    async fn within<T>(
        &self,
        kind: PersistenceKind,
        call: impl Future<Output = PersistenceResult<T>> + Send,
    ) -> PersistenceResult<T> {
        match tokio::time::timeout(self.deadline, call).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(operation = %kind, deadline = ?self.deadline, "storage call timed out");
                Err(PersistenceError::storage(
                    kind,
                    format!("timed out after {}ms", self.deadline.as_millis()),
                ))
            }
        }
    }
}

#[async_trait]
impl<R: UserRepository> UserRepository for TimeoutUserRepository<R> {
    async fn create(&self, user: User) -> PersistenceResult<User> {
        self.within(PersistenceKind::Create, self.inner.create(user))
            .await
    }

    async fn update(&self, user: User) -> PersistenceResult<User> {
        self.within(PersistenceKind::Update, self.inner.update(user))
            .await
    }

    async fn fetch_all(&self) -> PersistenceResult<Vec<User>> {
        self.within(PersistenceKind::Fetch, self.inner.fetch_all())
            .await
    }

    async fn delete(&self, id: &str) -> PersistenceResult<()> {
        self.within(PersistenceKind::Delete, self.inner.delete(id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::InMemoryUserRepository;

    struct StalledUserRepository;

    #[async_trait]
    impl UserRepository for StalledUserRepository {
        async fn create(&self, _user: User) -> PersistenceResult<User> {
            std::future::pending().await
        }

        async fn update(&self, _user: User) -> PersistenceResult<User> {
            std::future::pending().await
        }

        async fn fetch_all(&self) -> PersistenceResult<Vec<User>> {
            std::future::pending().await
        }

        async fn delete(&self, _id: &str) -> PersistenceResult<()> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn stalled_call_becomes_storage_error() {
        let repo = TimeoutUserRepository::new(StalledUserRepository, Duration::from_millis(10));

        let err = repo.delete("7").await.unwrap_err();
        assert_eq!(
            err,
            PersistenceError::Storage {
                kind: PersistenceKind::Delete,
                message: "timed out after 10ms".to_string(),
            }
        );
        assert_eq!(err.to_string(), "failed to delete user: timed out after 10ms");
    }

    #[tokio::test]
    async fn fast_calls_pass_through() {
        let repo = TimeoutUserRepository::new(InMemoryUserRepository::new(), DEFAULT_REQUEST_TIMEOUT);

        assert!(repo.fetch_all().await.unwrap().is_empty());
        repo.delete("never-existed").await.unwrap();
    }
}
