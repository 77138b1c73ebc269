use axum::routing::get;
use axum::Router;

use crate::handlers::images;
use crate::state::AppState;

/// Image routes mounted at `/images`.
///
/// ```text
/// GET /{reference}/url   -> resolve_image_url
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{reference}/url", get(images::resolve_image_url))
}
