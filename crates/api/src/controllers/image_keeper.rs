//! Image-host access shared by the series and musician controllers.

use std::sync::Arc;

use duo_core::diagnostics::record_failure;
use duo_core::error::CoreError;
use duo_core::types::ImageRef;

use crate::images::ImageStore;

/// Wraps an [`ImageStore`] with the error policy controllers need: upload
/// failures are server-side errors, removal of superseded images is best-effort.
#[derive(Clone)]
pub struct ImageKeeper {
    store: Arc<dyn ImageStore>,
}

impl ImageKeeper {
    pub fn new(store: Arc<dyn ImageStore>) -> Self {
        Self { store }
    }

    pub async fn upload(&self, bytes: Vec<u8>) -> Result<ImageRef, CoreError> {
        self.store
            .upload(bytes)
            .await
            .map_err(|e| record_failure("Error uploading image", &e))
    }

    /// Remove an image that is no longer referenced. Failures are logged only.
    pub async fn discard(&self, reference: &str) {
        if let Err(err) = self.store.delete(reference).await {
            tracing::warn!(reference, error = %err, "Failed to remove superseded image");
        }
    }

    pub fn url(&self, reference: &str) -> Result<String, CoreError> {
        self.store
            .resolve_url(reference)
            .map_err(|e| record_failure("Error resolving image URL", &e))
    }
}
