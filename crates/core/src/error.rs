use crate::types::DbId;

/// Classified domain failure.
///
/// Every controller operation reports one of these; the HTTP boundary maps
/// each variant to exactly one status class.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The addressed entity does not exist (404).
    #[error("{entity} with {key} not found")]
    NotFound { entity: &'static str, key: String },

    /// Malformed or contradictory client input (400).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The bearer credential could not be verified (401).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Row-shape, store or upstream failure (500). The message is for the
    /// diagnostic log only and never reaches the client.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Not-found for a lookup by primary key.
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        Self::NotFound {
            entity,
            key: format!("id {id}"),
        }
    }

    /// Not-found for a lookup by some other natural key.
    pub fn not_found_by(entity: &'static str, field: &str, value: &str) -> Self {
        Self::NotFound {
            entity,
            key: format!("{field} {value}"),
        }
    }

    /// Whether this error is the client's fault (anything but `Internal`).
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Internal(_))
    }
}
