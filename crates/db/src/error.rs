//! Persistence error classification.
//!
//! Callers need to tell three things apart: a unique-constraint violation
//! (client input collided with existing data), a row that could not be shaped
//! into a record (server-side construction failure), and everything else.

/// A row could not be turned into a strongly-typed record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot build {entity}: missing or invalid field `{field}`")]
pub struct MappingError {
    pub entity: &'static str,
    pub field: &'static str,
}

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// An insert or update collided with a unique constraint.
    #[error("unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    /// A fetched row did not fit the record it was folded into.
    #[error(transparent)]
    Mapping(#[from] MappingError),

    /// sqlx could not decode a column into the declared Rust type.
    #[error("row decode failed: {0}")]
    Decode(#[source] sqlx::Error),

    /// Any other store failure (connection, syntax, constraint other than unique).
    #[error("query failed: {0}")]
    Query(#[source] sqlx::Error),
}

impl DbError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, DbError::UniqueViolation { .. })
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                return DbError::UniqueViolation {
                    constraint: db_err.constraint().unwrap_or("unknown").to_string(),
                };
            }
        }
        if matches!(
            err,
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::ColumnNotFound(_) | sqlx::Error::Decode(_)
        ) {
            return DbError::Decode(err);
        }
        DbError::Query(err)
    }
}
