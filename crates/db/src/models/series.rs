//! Event series and their nested events.
//!
//! A series is stored as one `series` row plus zero or more `events` rows.
//! Reads come back as a flat `series LEFT JOIN events` result
//! ([`SeriesEventRow`]) that [`crate::mapper`] folds into [`EventSeries`].

use duo_core::types::{DbId, EventTime, ImageRef};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single scheduled performance. Owned by exactly one series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: DbId,
    pub location: String,
    pub starts_at: EventTime,
    pub ticket_url: Option<String>,
    pub map_url: Option<String>,
}

/// A named collection of events. `name` is globally unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSeries {
    pub id: DbId,
    pub name: String,
    pub description: String,
    /// Set only through the poster upload operation.
    pub poster_ref: Option<ImageRef>,
    pub events: Vec<Event>,
}

/// One row of `series LEFT JOIN events`.
///
/// Every column is optional so that shaping the row into a record is an
/// explicit, fallible step rather than a decode panic. The event columns are
/// all `NULL` when the series has no events.
#[derive(Debug, Clone, Default, FromRow)]
pub struct SeriesEventRow {
    pub series_id: Option<DbId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub poster_ref: Option<ImageRef>,
    pub event_id: Option<DbId>,
    pub location: Option<String>,
    pub starts_at: Option<EventTime>,
    pub ticket_url: Option<String>,
    pub map_url: Option<String>,
}

/// DTO for an event submitted with a create or replace. Any `id` the client
/// echoes back is ignored: events are always inserted fresh.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub location: String,
    pub starts_at: EventTime,
    pub ticket_url: Option<String>,
    pub map_url: Option<String>,
}

/// DTO for creating a series together with its events.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEventSeries {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub events: Vec<CreateEvent>,
}

/// DTO for replacing a series wholesale.
///
/// Shaped like [`EventSeries`] so a client can send back what it fetched.
/// `poster_ref` must match the stored value.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplaceEventSeries {
    pub id: DbId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub poster_ref: Option<ImageRef>,
    #[serde(default)]
    pub events: Vec<CreateEvent>,
}
