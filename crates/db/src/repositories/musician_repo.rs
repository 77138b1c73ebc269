//! Repository for the `musicians` table.

use async_trait::async_trait;
use duo_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::musician::Musician;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, bio, headshot_ref";

/// Persistence operations the musician controller depends on.
#[async_trait]
pub trait MusicianStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Musician>, DbError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Musician>, DbError>;

    /// Returns `false` if no row matched.
    async fn update_bio(&self, id: DbId, bio: &str) -> Result<bool, DbError>;

    /// Returns `false` if no row matched.
    async fn update_headshot(&self, id: DbId, headshot_ref: &str) -> Result<bool, DbError>;
}

/// Postgres-backed [`MusicianStore`].
#[derive(Clone)]
pub struct MusicianRepo {
    pool: PgPool,
}

impl MusicianRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MusicianStore for MusicianRepo {
    async fn list(&self) -> Result<Vec<Musician>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM musicians ORDER BY id");
        let rows = sqlx::query_as::<_, Musician>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Musician>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM musicians WHERE id = $1");
        let row = sqlx::query_as::<_, Musician>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_bio(&self, id: DbId, bio: &str) -> Result<bool, DbError> {
        let result = sqlx::query("UPDATE musicians SET bio = $2 WHERE id = $1")
            .bind(id)
            .bind(bio)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn update_headshot(&self, id: DbId, headshot_ref: &str) -> Result<bool, DbError> {
        let result = sqlx::query("UPDATE musicians SET headshot_ref = $2 WHERE id = $1")
            .bind(id)
            .bind(headshot_ref)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
