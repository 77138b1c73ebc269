//! Event series controller.
//!
//! Every write is followed by a re-read through [`SeriesController::get`]:
//! what the caller gets back is what the store holds, never the input echoed.

use std::sync::Arc;

use duo_core::content::{validate_event_location, validate_link, validate_series_name};
use duo_core::diagnostics::record_failure;
use duo_core::error::CoreError;
use duo_core::image::{ImagePolicy, UploadedImage};
use duo_core::types::DbId;
use duo_db::mapper::{fold_one_series, fold_series};
use duo_db::models::series::{CreateEvent, CreateEventSeries, EventSeries, ReplaceEventSeries};
use duo_db::repositories::SeriesStore;
use duo_db::DbError;

use super::ImageKeeper;

const DUPLICATE_NAME: &str = "Series name already exists: each series must have a unique name";

pub struct SeriesController {
    store: Arc<dyn SeriesStore>,
    images: ImageKeeper,
    policy: ImagePolicy,
}

impl SeriesController {
    pub fn new(store: Arc<dyn SeriesStore>, images: ImageKeeper, policy: ImagePolicy) -> Self {
        Self {
            store,
            images,
            policy,
        }
    }

    /// All series in creation order, each with its events.
    pub async fn list_all(&self) -> Result<Vec<EventSeries>, CoreError> {
        let rows = self
            .store
            .list_rows()
            .await
            .map_err(|e| record_failure("Error loading series", &e))?;
        fold_series(rows).map_err(|e| record_failure("Error building series", &e))
    }

    pub async fn get(&self, id: DbId) -> Result<EventSeries, CoreError> {
        let rows = self
            .store
            .rows_by_id(id)
            .await
            .map_err(|e| record_failure("Error loading series", &e))?;
        fold_one_series(rows)
            .map_err(|e| record_failure("Error building series", &e))?
            .ok_or_else(|| CoreError::not_found("Series", id))
    }

    /// Insert a series with its events (in the order supplied) and return
    /// the stored result.
    pub async fn create(&self, input: CreateEventSeries) -> Result<EventSeries, CoreError> {
        validate_fields(&input.name, &input.events)?;

        let id = self
            .store
            .create_with_events(&input)
            .await
            .map_err(|e| classify_write("Error creating series", e))?;
        tracing::info!(series_id = id, name = %input.name, "Created series");

        self.get(id).await
    }

    /// Verify and upload a poster, then point the series at it.
    ///
    /// The previous poster, if any, is removed from the image host once the
    /// new reference is stored.
    pub async fn add_poster(&self, id: DbId, image: UploadedImage) -> Result<EventSeries, CoreError> {
        let current = self.get(id).await?;
        let bytes = self.policy.verify(image)?;
        let poster_ref = self.images.upload(bytes).await?;

        let updated = self
            .store
            .set_poster(id, &poster_ref)
            .await
            .map_err(|e| record_failure("Error saving poster", &e))?;
        if !updated {
            // Deleted between the read and the write.
            self.images.discard(&poster_ref).await;
            return Err(CoreError::not_found("Series", id));
        }
        tracing::info!(series_id = id, poster = %poster_ref, "Replaced series poster");

        if let Some(previous) = current.poster_ref.filter(|p| *p != poster_ref) {
            self.images.discard(&previous).await;
        }
        self.get(id).await
    }

    /// Delete a series and, through the cascade, its events.
    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        let current = self.get(id).await?;

        let deleted = self
            .store
            .delete_series(id)
            .await
            .map_err(|e| record_failure("Error deleting series", &e))?;
        if !deleted {
            return Err(CoreError::not_found("Series", id));
        }
        tracing::info!(series_id = id, "Deleted series");

        if let Some(poster) = current.poster_ref {
            self.images.discard(&poster).await;
        }
        Ok(())
    }

    /// Replace a series wholesale: scalar fields are overwritten and the
    /// submitted events are inserted fresh, so no event id survives.
    pub async fn replace(
        &self,
        route_id: DbId,
        input: ReplaceEventSeries,
    ) -> Result<EventSeries, CoreError> {
        if route_id != input.id {
            return Err(CoreError::Validation(
                "ID in URL does not match ID in request body".into(),
            ));
        }
        validate_fields(&input.name, &input.events)?;

        let current = self.get(input.id).await?;
        if input.poster_ref != current.poster_ref {
            return Err(CoreError::Validation(
                "Poster cannot be changed directly; use the poster upload instead".into(),
            ));
        }

        self.store
            .replace_with_events(&input)
            .await
            .map_err(|e| classify_write("Error replacing series", e))?;
        tracing::info!(series_id = input.id, events = input.events.len(), "Replaced series");

        self.get(input.id).await
    }
}

fn validate_fields(name: &str, events: &[CreateEvent]) -> Result<(), CoreError> {
    validate_series_name(name)?;
    for event in events {
        validate_event_location(&event.location)?;
        validate_link("ticket_url", event.ticket_url.as_deref())?;
        validate_link("map_url", event.map_url.as_deref())?;
    }
    Ok(())
}

/// A name collision is the client's fault; anything else is ours.
fn classify_write(context: &'static str, err: DbError) -> CoreError {
    if err.is_unique_violation() {
        CoreError::Validation(DUPLICATE_NAME.into())
    } else {
        record_failure(context, &err)
    }
}
