//! Folds flat `series LEFT JOIN events` rows into nested [`EventSeries`].
//!
//! The join yields one row per event with the series columns repeated, or a
//! single row with `NULL` event columns for a series without events. Folding:
//!
//! - keys series by their unique `name`, in the order each name first appears;
//! - appends one [`Event`] per row with a non-null `event_id`, in row order;
//! - fails as a whole on the first row that cannot be shaped (no partial result).

use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::error::MappingError;
use crate::models::series::{Event, EventSeries, SeriesEventRow};

const SERIES: &str = "EventSeries";
const EVENT: &str = "Event";

fn required<T>(value: Option<T>, entity: &'static str, field: &'static str) -> Result<T, MappingError> {
    value.ok_or(MappingError { entity, field })
}

fn series_from_row(row: &SeriesEventRow, name: String) -> Result<EventSeries, MappingError> {
    Ok(EventSeries {
        id: required(row.series_id, SERIES, "series_id")?,
        name,
        description: required(row.description.clone(), SERIES, "description")?,
        poster_ref: row.poster_ref.clone(),
        events: Vec::new(),
    })
}

/// `None` for the outer-join "no children" row.
fn event_from_row(row: SeriesEventRow) -> Result<Option<Event>, MappingError> {
    let Some(id) = row.event_id else {
        return Ok(None);
    };
    Ok(Some(Event {
        id,
        location: required(row.location, EVENT, "location")?,
        starts_at: required(row.starts_at, EVENT, "starts_at")?,
        ticket_url: row.ticket_url,
        map_url: row.map_url,
    }))
}

/// Fold joined rows into series, ordered by first appearance of each name.
pub fn fold_series(rows: Vec<SeriesEventRow>) -> Result<Vec<EventSeries>, MappingError> {
    let mut by_name: IndexMap<String, EventSeries> = IndexMap::new();

    for row in rows {
        let name = required(row.name.clone(), SERIES, "name")?;
        let series = match by_name.entry(name) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let series = series_from_row(&row, entry.key().clone())?;
                entry.insert(series)
            }
        };
        if let Some(event) = event_from_row(row)? {
            series.events.push(event);
        }
    }

    Ok(by_name.into_values().collect())
}

/// Fold rows fetched for a single series id.
///
/// Empty input means the series does not exist. Rows naming more than one
/// series cannot come from a single-id query and are rejected.
pub fn fold_one_series(rows: Vec<SeriesEventRow>) -> Result<Option<EventSeries>, MappingError> {
    let mut folded = fold_series(rows)?;
    match folded.len() {
        0 => Ok(None),
        1 => Ok(folded.pop()),
        _ => Err(MappingError {
            entity: SERIES,
            field: "series_id",
        }),
    }
}
