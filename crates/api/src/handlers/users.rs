use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use duo_core::types::DbId;

use crate::error::AppResult;
use crate::middleware::auth::BearerToken;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/users
pub async fn list_users(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> AppResult<impl IntoResponse> {
    let users = state.orchestrator.get_users(&token).await?;
    Ok(Json(DataResponse { data: users }))
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    BearerToken(token): BearerToken,
) -> AppResult<impl IntoResponse> {
    let user = state.orchestrator.get_user(id, &token).await?;
    Ok(Json(DataResponse { data: user }))
}

/// POST /api/v1/users
///
/// Called by the client after login. Binds the token's subject to the
/// account provisioned for its email and returns that account.
pub async fn login(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> AppResult<impl IntoResponse> {
    let user = state.orchestrator.create_user(&token).await?;
    Ok(Json(DataResponse { data: user }))
}
