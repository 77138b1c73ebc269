//! Contact form. Messages are handed to the notifier in the background; the
//! visitor gets `202 Accepted` whether or not delivery later succeeds.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use duo_core::content::validate_contact;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ContactReceipt {
    pub queued: bool,
}

/// POST /api/v1/contact
pub async fn send_message(
    State(state): State<AppState>,
    Json(input): Json<ContactMessage>,
) -> AppResult<impl IntoResponse> {
    validate_contact(&input.name, &input.email, &input.message)?;

    let notifier = state
        .notifier
        .clone()
        .ok_or_else(|| AppError::InternalError("Contact notifications are not configured".into()))?;

    let subject = format!("New message from {}", input.name);
    let body = format!("From: {}\n\n{}", input.email, input.message);
    tokio::spawn(async move {
        if let Err(err) = notifier.send(&subject, &body).await {
            tracing::error!(error = %err, "Failed to deliver contact message");
        }
    });

    Ok((
        StatusCode::ACCEPTED,
        Json(DataResponse {
            data: ContactReceipt { queued: true },
        }),
    ))
}
