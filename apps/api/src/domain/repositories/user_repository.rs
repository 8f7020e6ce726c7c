use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

use crate::domain::user::User;

/// Repository operation that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceKind {
    Create,
    Update,
    Fetch,
    Delete,
}

impl fmt::Display for PersistenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceKind::Create => write!(f, "add"),
            PersistenceKind::Update => write!(f, "update"),
            PersistenceKind::Fetch => write!(f, "fetch"),
            PersistenceKind::Delete => write!(f, "delete"),
        }
    }
}

/// Errors surfaced by a [`UserRepository`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    #[error("user not found: {0}")]
    NotFound(String),

    #[error("failed to {kind} user: {message}")]
    Conflict {
        kind: PersistenceKind,
        message: String,
    },

    #[error("failed to {kind} user: {message}")]
    Storage {
        kind: PersistenceKind,
        message: String,
    },
}

impl PersistenceError {
    /// Wraps a storage-layer failure for the given operation
    pub fn storage(kind: PersistenceKind, err: impl fmt::Display) -> Self {
        PersistenceError::Storage {
            kind,
            message: err.to_string(),
        }
    }
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Repository trait for the user roster
///
/// Callers hand over users that already passed validation; implementations
/// do not validate again.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user and returns it with its assigned id
    ///
    /// Any id the user already carries is ignored and replaced.
    async fn create(&self, user: User) -> PersistenceResult<User>;

    /// Overwrites every mutable field of the user with the same id
    ///
    /// Fails with [`PersistenceError::NotFound`] when no row matches.
    async fn update(&self, user: User) -> PersistenceResult<User>;

    /// Returns every stored user ordered by id
    async fn fetch_all(&self) -> PersistenceResult<Vec<User>>;

    /// Removes the user with the given id
    ///
    /// Deleting an unknown id succeeds.
    async fn delete(&self, id: &str) -> PersistenceResult<()>;
}
