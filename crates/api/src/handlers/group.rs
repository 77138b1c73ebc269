use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use duo_db::models::group::UpdateGroupBio;

use crate::error::AppResult;
use crate::middleware::auth::BearerToken;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/group
pub async fn get_group(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let group = state.orchestrator.get_group().await?;
    Ok(Json(DataResponse { data: group }))
}

/// PATCH /api/v1/group
pub async fn update_group_bio(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Json(input): Json<UpdateGroupBio>,
) -> AppResult<impl IntoResponse> {
    let group = state
        .orchestrator
        .update_group_bio(&input.bio, &token)
        .await?;
    Ok(Json(DataResponse { data: group }))
}
