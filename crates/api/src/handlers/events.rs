//! Handlers for event series and their events.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use duo_core::types::DbId;
use duo_db::models::series::{CreateEventSeries, ReplaceEventSeries};

use crate::error::AppResult;
use crate::handlers::upload::read_image;
use crate::middleware::auth::BearerToken;
use crate::response::DataResponse;
use crate::state::AppState;

/// Multipart field carrying the poster file.
const POSTER_FIELD: &str = "poster";

/// GET /api/v1/events
pub async fn list_series(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let series = state.orchestrator.get_events().await?;
    Ok(Json(DataResponse { data: series }))
}

/// GET /api/v1/events/{id}
pub async fn get_series(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let series = state.orchestrator.get_event(id).await?;
    Ok(Json(DataResponse { data: series }))
}

/// POST /api/v1/events
///
/// Create a series together with its events.
pub async fn create_series(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Json(input): Json<CreateEventSeries>,
) -> AppResult<impl IntoResponse> {
    let series = state.orchestrator.create_event(input, &token).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: series })))
}

/// PUT /api/v1/events/{id}
///
/// Replace a series wholesale. Events are re-created with new ids.
pub async fn replace_series(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    BearerToken(token): BearerToken,
    Json(input): Json<ReplaceEventSeries>,
) -> AppResult<impl IntoResponse> {
    let series = state.orchestrator.update_series(id, input, &token).await?;
    Ok(Json(DataResponse { data: series }))
}

/// DELETE /api/v1/events/{id}
pub async fn delete_series(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    BearerToken(token): BearerToken,
) -> AppResult<impl IntoResponse> {
    state.orchestrator.delete_series(id, &token).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/events/{id}/poster
///
/// Multipart upload; the file goes in the `poster` field.
pub async fn upload_poster(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    BearerToken(token): BearerToken,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let image = read_image(multipart, POSTER_FIELD).await?;
    let series = state
        .orchestrator
        .add_series_poster(id, image, &token)
        .await?;
    Ok(Json(DataResponse { data: series }))
}
