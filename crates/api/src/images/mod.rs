//! External image hosting for posters and headshots.
//!
//! Controllers only see the [`ImageStore`] trait; the hosted implementation
//! lives in [`cloudinary`].

pub mod cloudinary;

use async_trait::async_trait;
use duo_core::types::ImageRef;

pub use cloudinary::{CloudinaryConfig, CloudinaryImageStore};

/// Error type for image host failures.
#[derive(Debug, thiserror::Error)]
pub enum ImageStoreError {
    /// The underlying HTTP request failed (network, DNS, timeout, bad status).
    #[error("Image host request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The host answered but refused the operation.
    #[error("Image host rejected {operation}: {detail}")]
    Rejected {
        operation: &'static str,
        detail: String,
    },
}

/// Upload, removal and URL resolution of hosted images.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Store the bytes and return the host's opaque reference for them.
    async fn upload(&self, bytes: Vec<u8>) -> Result<ImageRef, ImageStoreError>;

    async fn delete(&self, reference: &str) -> Result<(), ImageStoreError>;

    /// Public delivery URL for a reference. Does not contact the host.
    fn resolve_url(&self, reference: &str) -> Result<String, ImageStoreError>;
}
