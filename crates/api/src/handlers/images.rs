use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ImageUrl {
    pub reference: String,
    pub url: String,
}

/// GET /api/v1/images/{reference}/url
///
/// References containing `/` must be percent-encoded.
pub async fn resolve_image_url(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> AppResult<impl IntoResponse> {
    let url = state.orchestrator.image_url(&reference)?;
    Ok(Json(DataResponse {
        data: ImageUrl { reference, url },
    }))
}
