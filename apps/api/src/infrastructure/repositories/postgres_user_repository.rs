use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::domain::repositories::{
    PersistenceError, PersistenceKind, PersistenceResult, UserRepository,
};
use crate::domain::user::{Email, User, UserStatus};

const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id          TEXT PRIMARY KEY DEFAULT gen_random_uuid()::text,
        user_name   TEXT NOT NULL,
        first_name  TEXT NOT NULL,
        last_name   TEXT NOT NULL,
        email       TEXT NOT NULL,
        department  TEXT NOT NULL,
        user_status CHAR(1) NOT NULL CHECK (user_status IN ('I', 'A', 'T'))
    )
"#;

/// Row shape of the `users` table
#[derive(Debug, FromRow)]
struct UserRow {
    id: String,
    user_name: String,
    first_name: String,
    last_name: String,
    email: String,
    department: String,
    user_status: String,
}

impl UserRow {
    /// Decodes the stored status code; an unknown code fails the whole fetch
    fn into_user(self) -> PersistenceResult<User> {
        let status = UserStatus::from_code(self.user_status.trim())
            .map_err(|e| PersistenceError::storage(PersistenceKind::Fetch, e))?;
        Ok(User::from_persistence(
            self.id,
            self.user_name,
            self.first_name,
            self.last_name,
            Email::from_persisted(self.email),
            self.department,
            status,
        ))
    }
}

/// Maps a driver error, singling out unique constraint violations
fn map_sqlx_error(kind: PersistenceKind, err: sqlx::Error) -> PersistenceError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            return PersistenceError::Conflict {
                kind,
                message: db.message().to_string(),
            };
        }
    }
    PersistenceError::storage(kind, err)
}

/// PostgreSQL implementation of UserRepository
///
/// Every operation is a single parameterized statement against `users`;
/// the status column holds the single character code of [`UserStatus`].
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the `users` table when it does not exist yet
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_USERS_TABLE).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> PersistenceResult<User> {
        let id = sqlx::query_scalar::<_, String>(
            r#"
            INSERT INTO users (
                user_name, first_name, last_name, email, department, user_status
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(user.user_name())
        .bind(user.first_name())
        .bind(user.last_name())
        .bind(user.email().as_str())
        .bind(user.department())
        .bind(user.status().code())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(PersistenceKind::Create, e))?;

        tracing::info!(user_id = %id, "user created");
        Ok(user.with_id(id))
    }

    async fn update(&self, user: User) -> PersistenceResult<User> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET user_name = $2, first_name = $3, last_name = $4,
                email = $5, department = $6, user_status = $7
            WHERE id = $1
            "#,
        )
        .bind(user.id())
        .bind(user.user_name())
        .bind(user.first_name())
        .bind(user.last_name())
        .bind(user.email().as_str())
        .bind(user.department())
        .bind(user.status().code())
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(PersistenceKind::Update, e))?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotFound(user.id().to_string()));
        }

        tracing::info!(user_id = %user.id(), "user updated");
        Ok(user)
    }

    async fn fetch_all(&self) -> PersistenceResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, user_name, first_name, last_name, email, department, user_status
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(PersistenceKind::Fetch, e))?;

        tracing::debug!(count = rows.len(), "fetched users");
        rows.into_iter().map(UserRow::into_user).collect()
    }

    async fn delete(&self, id: &str) -> PersistenceResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM users WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(PersistenceKind::Delete, e))?;

        if result.rows_affected() == 0 {
            tracing::debug!(user_id = %id, "delete matched no user");
        } else {
            tracing::info!(user_id = %id, "user deleted");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(user_status: &str) -> UserRow {
        UserRow {
            id: "1".to_string(),
            user_name: "willi".to_string(),
            first_name: "john".to_string(),
            last_name: "peter".to_string(),
            email: "john@gmaily.com".to_string(),
            department: "computer".to_string(),
            user_status: user_status.to_string(),
        }
    }

    #[test]
    fn row_decodes_status_code() {
        let user = row("A").into_user().unwrap();
        assert_eq!(user.id(), "1");
        assert_eq!(user.status(), UserStatus::Active);
    }

    #[test]
    fn stored_email_is_not_revalidated() {
        let user = UserRow {
            email: "not-an-email".to_string(),
            ..row("I")
        }
        .into_user()
        .unwrap();
        assert_eq!(user.email().as_str(), "not-an-email");
    }

    #[test]
    fn unknown_status_code_is_a_fetch_error() {
        let err = row("X").into_user().unwrap_err();
        assert_eq!(
            err,
            PersistenceError::Storage {
                kind: PersistenceKind::Fetch,
                message: "invalid status code: X".to_string(),
            }
        );
    }
}
