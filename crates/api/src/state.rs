use std::sync::Arc;

use crate::controllers::Orchestrator;
use crate::notifier::Notifier;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (health checks only; domain access goes
    /// through the orchestrator's stores).
    pub pool: duo_db::DbPool,
    pub orchestrator: Arc<Orchestrator>,
    /// Contact-form delivery. `None` when SMTP is not configured.
    pub notifier: Option<Arc<dyn Notifier>>,
}
