//! Musician entity model.
//!
//! Musicians are provisioned out-of-band and only ever updated through the
//! API (bio or headshot, one at a time).

use duo_core::types::{DbId, ImageRef};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `musicians` table. Also the body of a musician update.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Musician {
    pub id: DbId,
    pub name: String,
    pub bio: String,
    pub headshot_ref: ImageRef,
}
