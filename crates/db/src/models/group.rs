//! Group profile model. The `group_profile` table holds exactly one row.

use duo_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Group {
    pub id: DbId,
    pub name: String,
    pub bio: String,
}

/// DTO for a group update. Only the bio is mutable; other fields a client
/// sends along with it are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGroupBio {
    pub bio: String,
}
