use std::sync::Arc;

use duo_core::diagnostics::record_failure;
use duo_core::error::CoreError;
use duo_core::image::{ImagePolicy, UploadedImage};
use duo_core::types::DbId;
use duo_db::models::musician::Musician;
use duo_db::repositories::MusicianStore;

use super::ImageKeeper;

pub struct MusicianController {
    store: Arc<dyn MusicianStore>,
    images: ImageKeeper,
    policy: ImagePolicy,
}

impl MusicianController {
    pub fn new(store: Arc<dyn MusicianStore>, images: ImageKeeper, policy: ImagePolicy) -> Self {
        Self {
            store,
            images,
            policy,
        }
    }

    pub async fn list_all(&self) -> Result<Vec<Musician>, CoreError> {
        self.store
            .list()
            .await
            .map_err(|e| record_failure("Error loading musicians", &e))
    }

    pub async fn get(&self, id: DbId) -> Result<Musician, CoreError> {
        self.store
            .find_by_id(id)
            .await
            .map_err(|e| record_failure("Error loading musician", &e))?
            .ok_or_else(|| CoreError::not_found("Musician", id))
    }

    /// Change either the bio or the headshot, never both.
    ///
    /// A bio that differs from the stored one wins and `image` is ignored.
    /// Otherwise the image, if any, becomes the new headshot. A call that
    /// would change nothing is rejected.
    pub async fn update(
        &self,
        id: DbId,
        new_bio: &str,
        image: Option<UploadedImage>,
    ) -> Result<Musician, CoreError> {
        let current = self.get(id).await?;

        if new_bio != current.bio {
            self.update_bio(id, new_bio).await
        } else if let Some(image) = image {
            self.replace_headshot(&current, image).await
        } else {
            Err(CoreError::Validation(
                "Update must change either the bio or the headshot".into(),
            ))
        }
    }

    async fn update_bio(&self, id: DbId, bio: &str) -> Result<Musician, CoreError> {
        let updated = self
            .store
            .update_bio(id, bio)
            .await
            .map_err(|e| record_failure("Error updating musician bio", &e))?;
        if !updated {
            return Err(CoreError::not_found("Musician", id));
        }
        tracing::info!(musician_id = id, "Updated musician bio");
        self.get(id).await
    }

    async fn replace_headshot(
        &self,
        current: &Musician,
        image: UploadedImage,
    ) -> Result<Musician, CoreError> {
        let bytes = self.policy.verify(image)?;
        let headshot_ref = self.images.upload(bytes).await?;

        let updated = self
            .store
            .update_headshot(current.id, &headshot_ref)
            .await
            .map_err(|e| record_failure("Error saving headshot", &e))?;
        if !updated {
            self.images.discard(&headshot_ref).await;
            return Err(CoreError::not_found("Musician", current.id));
        }
        tracing::info!(musician_id = current.id, headshot = %headshot_ref, "Replaced headshot");

        if current.headshot_ref != headshot_ref {
            self.images.discard(&current.headshot_ref).await;
        }
        self.get(current.id).await
    }
}
