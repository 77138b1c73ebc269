use axum::routing::get;
use axum::Router;

use crate::handlers::group;
use crate::state::AppState;

/// Group profile routes mounted at `/group`.
///
/// ```text
/// GET   /   -> get_group
/// PATCH /   -> update_group_bio
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(group::get_group).patch(group::update_group_bio))
}
