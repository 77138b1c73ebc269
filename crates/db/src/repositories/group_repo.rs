//! Repository for the single-row `group_profile` table.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::group::Group;

#[async_trait]
pub trait GroupStore: Send + Sync {
    /// The group row, or `None` if the table has not been seeded.
    async fn find(&self) -> Result<Option<Group>, DbError>;

    /// Overwrite the bio. The table's key constraint guarantees one row at most.
    async fn update_bio(&self, bio: &str) -> Result<bool, DbError>;
}

/// Postgres-backed [`GroupStore`].
#[derive(Clone)]
pub struct GroupRepo {
    pool: PgPool,
}

impl GroupRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GroupStore for GroupRepo {
    async fn find(&self) -> Result<Option<Group>, DbError> {
        let row = sqlx::query_as::<_, Group>("SELECT id, name, bio FROM group_profile LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_bio(&self, bio: &str) -> Result<bool, DbError> {
        let result = sqlx::query("UPDATE group_profile SET bio = $1")
            .bind(bio)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
