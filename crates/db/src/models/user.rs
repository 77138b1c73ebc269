//! Administrator account model.
//!
//! Accounts are provisioned by email out-of-band. `subject` is bound on the
//! first successful login and never changes afterwards.

use duo_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
}
