use axum::routing::post;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Contact form route mounted at `/contact`.
///
/// ```text
/// POST /   -> send_message
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(contact::send_message))
}
