//! Shared primitive aliases.

/// Primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Wall-clock start time of a performance, local to the venue.
///
/// Stored as `TIMESTAMP` (no zone): a concert announced for 7pm in Medford
/// starts at 7pm in Medford regardless of where the site is served from.
pub type EventTime = chrono::NaiveDateTime;

/// Opaque identifier of an image held by the external image host.
pub type ImageRef = String;
