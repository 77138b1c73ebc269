//! Repository for the `series` and `events` tables.

use async_trait::async_trait;
use duo_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::error::DbError;
use crate::models::series::{CreateEvent, CreateEventSeries, ReplaceEventSeries, SeriesEventRow};

/// `series LEFT JOIN events`, one row per event (or one row with `NULL` event
/// columns for a series without events).
const JOINED_SELECT: &str = "SELECT s.id AS series_id, s.name, s.description, s.poster_ref, \
                                    e.id AS event_id, e.location, e.starts_at, e.ticket_url, e.map_url \
                             FROM series s \
                             LEFT JOIN events e ON e.series_id = s.id";

/// Persistence operations the series controller depends on.
///
/// Reads return raw joined rows; shaping them is the caller's job
/// (see [`crate::mapper`]).
#[async_trait]
pub trait SeriesStore: Send + Sync {
    /// Every series joined with its events, series in creation order and
    /// events in creation order within each series.
    async fn list_rows(&self) -> Result<Vec<SeriesEventRow>, DbError>;

    /// The joined rows of one series. Empty when the series does not exist.
    async fn rows_by_id(&self, id: DbId) -> Result<Vec<SeriesEventRow>, DbError>;

    /// Insert a series and its events atomically, returning the new series id.
    ///
    /// A duplicate name surfaces as [`DbError::UniqueViolation`].
    async fn create_with_events(&self, input: &CreateEventSeries) -> Result<DbId, DbError>;

    /// Replace a series wholesale in one transaction: delete its events,
    /// overwrite the scalar fields, insert the submitted events fresh.
    async fn replace_with_events(&self, input: &ReplaceEventSeries) -> Result<(), DbError>;

    /// Point the series at a newly uploaded poster. Returns `false` if no row matched.
    async fn set_poster(&self, id: DbId, poster_ref: &str) -> Result<bool, DbError>;

    /// Delete a series; its events go with it (`ON DELETE CASCADE`).
    async fn delete_series(&self, id: DbId) -> Result<bool, DbError>;
}

/// Postgres-backed [`SeriesStore`].
#[derive(Clone)]
pub struct SeriesRepo {
    pool: PgPool,
}

impl SeriesRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert the series row only, returning its generated id.
    pub async fn insert_series(
        conn: &mut PgConnection,
        name: &str,
        description: &str,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO series (name, description) VALUES ($1, $2) RETURNING id",
        )
        .bind(name)
        .bind(description)
        .fetch_one(conn)
        .await
    }

    /// Insert one event under `series_id`, returning its generated id.
    pub async fn insert_event(
        conn: &mut PgConnection,
        series_id: DbId,
        event: &CreateEvent,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO events (series_id, location, starts_at, ticket_url, map_url) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id",
        )
        .bind(series_id)
        .bind(&event.location)
        .bind(event.starts_at)
        .bind(&event.ticket_url)
        .bind(&event.map_url)
        .fetch_one(conn)
        .await
    }

    /// Bulk-delete every event of a series. Returns the number removed.
    pub async fn delete_events_by_series(
        conn: &mut PgConnection,
        series_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE series_id = $1")
            .bind(series_id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Overwrite name, description and poster in place.
    pub async fn replace_series(
        conn: &mut PgConnection,
        input: &ReplaceEventSeries,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE series SET name = $2, description = $3, poster_ref = $4 WHERE id = $1",
        )
        .bind(input.id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(&input.poster_ref)
        .execute(conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl SeriesStore for SeriesRepo {
    async fn list_rows(&self) -> Result<Vec<SeriesEventRow>, DbError> {
        let query = format!("{JOINED_SELECT} ORDER BY s.id, e.id");
        let rows = sqlx::query_as::<_, SeriesEventRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn rows_by_id(&self, id: DbId) -> Result<Vec<SeriesEventRow>, DbError> {
        let query = format!("{JOINED_SELECT} WHERE s.id = $1 ORDER BY e.id");
        let rows = sqlx::query_as::<_, SeriesEventRow>(&query)
            .bind(id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create_with_events(&self, input: &CreateEventSeries) -> Result<DbId, DbError> {
        let mut tx = self.pool.begin().await?;

        let series_id = Self::insert_series(&mut *tx, &input.name, &input.description).await?;
        for event in &input.events {
            Self::insert_event(&mut *tx, series_id, event).await?;
        }

        tx.commit().await?;
        tracing::debug!(series_id, events = input.events.len(), "Inserted series");
        Ok(series_id)
    }

    async fn replace_with_events(&self, input: &ReplaceEventSeries) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        let removed = Self::delete_events_by_series(&mut *tx, input.id).await?;
        Self::replace_series(&mut *tx, input).await?;
        for event in &input.events {
            Self::insert_event(&mut *tx, input.id, event).await?;
        }

        tx.commit().await?;
        tracing::debug!(
            series_id = input.id,
            removed,
            inserted = input.events.len(),
            "Replaced series"
        );
        Ok(())
    }

    async fn set_poster(&self, id: DbId, poster_ref: &str) -> Result<bool, DbError> {
        let result = sqlx::query("UPDATE series SET poster_ref = $2 WHERE id = $1")
            .bind(id)
            .bind(poster_ref)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_series(&self, id: DbId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM series WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
