use std::sync::Arc;

use duo_core::diagnostics::record_failure;
use duo_core::error::CoreError;
use duo_core::types::DbId;
use duo_db::models::group::Group;
use duo_db::repositories::GroupStore;

/// The group profile is a single seeded row.
const GROUP_ID: DbId = 1;

pub struct GroupController {
    store: Arc<dyn GroupStore>,
}

impl GroupController {
    pub fn new(store: Arc<dyn GroupStore>) -> Self {
        Self { store }
    }

    pub async fn get(&self) -> Result<Group, CoreError> {
        let group = self
            .store
            .find()
            .await
            .map_err(|e| record_failure("Error loading group", &e))?;
        group.ok_or_else(|| {
            tracing::error!("Group profile row is missing; has the database been seeded?");
            CoreError::not_found("Group", GROUP_ID)
        })
    }

    pub async fn update_bio(&self, bio: &str) -> Result<Group, CoreError> {
        let updated = self
            .store
            .update_bio(bio)
            .await
            .map_err(|e| record_failure("Error updating group bio", &e))?;
        if !updated {
            tracing::error!("Group profile row is missing; has the database been seeded?");
            return Err(CoreError::not_found("Group", GROUP_ID));
        }
        tracing::info!("Updated group bio");
        self.get().await
    }
}
