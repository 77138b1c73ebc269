//! Repository for the `users` table.

use async_trait::async_trait;
use duo_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::user::User;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, subject";

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, DbError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<User>, DbError>;

    /// Find a user by email (case-sensitive).
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbError>;

    async fn find_by_subject(&self, subject: &str) -> Result<Option<User>, DbError>;

    /// Bind `subject` to the account with `email` if, and only if, the
    /// account has no subject yet. Returns `true` if a row was written.
    async fn attach_subject(&self, email: &str, subject: &str) -> Result<bool, DbError>;
}

/// Postgres-backed [`UserStore`].
#[derive(Clone)]
pub struct UserRepo {
    pool: PgPool,
}

impl UserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_where(&self, column: &str, value: &str) -> Result<Option<User>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE {column} = $1");
        let row = sqlx::query_as::<_, User>(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}

#[async_trait]
impl UserStore for UserRepo {
    async fn list(&self) -> Result<Vec<User>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY id");
        let rows = sqlx::query_as::<_, User>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<User>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        let row = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbError> {
        self.find_where("email", email).await
    }

    async fn find_by_subject(&self, subject: &str) -> Result<Option<User>, DbError> {
        self.find_where("subject", subject).await
    }

    async fn attach_subject(&self, email: &str, subject: &str) -> Result<bool, DbError> {
        let result =
            sqlx::query("UPDATE users SET subject = $2 WHERE email = $1 AND subject IS NULL")
                .bind(email)
                .bind(subject)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
