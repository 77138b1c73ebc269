use axum::routing::{get, post};
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

/// Event series routes mounted at `/events`.
///
/// ```text
/// GET    /              -> list_series
/// POST   /              -> create_series
/// GET    /{id}          -> get_series
/// PUT    /{id}          -> replace_series
/// DELETE /{id}          -> delete_series
/// POST   /{id}/poster   -> upload_poster
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(events::list_series).post(events::create_series))
        .route(
            "/{id}",
            get(events::get_series)
                .put(events::replace_series)
                .delete(events::delete_series),
        )
        .route("/{id}/poster", post(events::upload_poster))
}
