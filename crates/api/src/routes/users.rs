use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// User routes mounted at `/users`.
///
/// ```text
/// GET  /       -> list_users
/// POST /       -> login
/// GET  /{id}   -> get_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list_users).post(users::login))
        .route("/{id}", get(users::get_user))
}
