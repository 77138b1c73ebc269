use axum::routing::{get, post};
use axum::Router;

use crate::handlers::musicians;
use crate::state::AppState;

/// Musician routes mounted at `/musicians`.
///
/// ```text
/// GET   /                -> list_musicians
/// GET   /{id}            -> get_musician
/// PATCH /{id}            -> update_musician
/// POST  /{id}/headshot   -> upload_headshot
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(musicians::list_musicians))
        .route(
            "/{id}",
            get(musicians::get_musician).patch(musicians::update_musician),
        )
        .route("/{id}/headshot", post(musicians::upload_headshot))
}
