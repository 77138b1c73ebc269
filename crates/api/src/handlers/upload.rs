//! Multipart image extraction shared by the poster and headshot endpoints.

use axum::extract::Multipart;
use duo_core::image::UploadedImage;

use crate::error::{AppError, AppResult};

/// Read the part named `field` into memory. Other parts are skipped.
pub async fn read_image(mut multipart: Multipart, field: &str) -> AppResult<UploadedImage> {
    while let Some(part) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if part.name() != Some(field) {
            continue;
        }
        let content_type = part.content_type().map(str::to_string);
        let bytes = part
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        return Ok(UploadedImage {
            content_type,
            bytes: bytes.to_vec(),
        });
    }
    Err(AppError::BadRequest(format!(
        "Missing multipart field '{field}'"
    )))
}
