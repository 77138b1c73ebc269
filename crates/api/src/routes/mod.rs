pub mod contact;
pub mod events;
pub mod group;
pub mod health;
pub mod images;
pub mod musicians;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /events                        list, create (auth)
/// /events/{id}                   get, replace (auth), delete (auth)
/// /events/{id}/poster            poster upload (auth, multipart)
///
/// /musicians                     list
/// /musicians/{id}                get, update bio (auth)
/// /musicians/{id}/headshot       headshot upload (auth, multipart)
///
/// /group                         get, update bio (auth)
///
/// /users                         list (auth), first-login binding (POST)
/// /users/{id}                    get (auth)
///
/// /contact                       contact form (POST)
/// /images/{reference}/url        resolve an image reference
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/events", events::router())
        .nest("/musicians", musicians::router())
        .nest("/group", group::router())
        .nest("/users", users::router())
        .nest("/contact", contact::router())
        .nest("/images", images::router())
}
