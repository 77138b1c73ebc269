//! Bearer credential extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use duo_core::error::CoreError;

use crate::error::AppError;

/// The unverified token from `Authorization: Bearer <token>`.
///
/// Only the header shape is checked here. Verification happens in the
/// orchestrator, after any checks that must run before authorization.
///
/// ```ignore
/// async fn my_handler(State(state): State<AppState>, BearerToken(token): BearerToken) -> AppResult<...> {
///     state.orchestrator.delete_series(id, &token).await?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Invalid Authorization format. Expected: Bearer <token>".into(),
                ))
            })?;

        Ok(BearerToken(token.to_string()))
    }
}
