use axum::extract::{Multipart, Path, State};
use axum::response::IntoResponse;
use axum::Json;
use duo_core::types::DbId;
use duo_db::models::musician::Musician;

use crate::error::AppResult;
use crate::handlers::upload::read_image;
use crate::middleware::auth::BearerToken;
use crate::response::DataResponse;
use crate::state::AppState;

/// Multipart field carrying the headshot file.
const HEADSHOT_FIELD: &str = "file";

/// GET /api/v1/musicians
pub async fn list_musicians(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let musicians = state.orchestrator.get_musicians().await?;
    Ok(Json(DataResponse { data: musicians }))
}

/// GET /api/v1/musicians/{id}
pub async fn get_musician(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let musician = state.orchestrator.get_musician(id).await?;
    Ok(Json(DataResponse { data: musician }))
}

/// PATCH /api/v1/musicians/{id}
///
/// The body is the whole musician; only a changed bio is applied.
pub async fn update_musician(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    BearerToken(token): BearerToken,
    Json(musician): Json<Musician>,
) -> AppResult<impl IntoResponse> {
    let musician = state
        .orchestrator
        .update_musician(id, musician, &token, None)
        .await?;
    Ok(Json(DataResponse { data: musician }))
}

/// POST /api/v1/musicians/{id}/headshot
///
/// Multipart upload; the file goes in the `file` field.
pub async fn upload_headshot(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    BearerToken(token): BearerToken,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let image = read_image(multipart, HEADSHOT_FIELD).await?;
    let musician = state
        .orchestrator
        .update_musician_headshot(id, image, &token)
        .await?;
    Ok(Json(DataResponse { data: musician }))
}
