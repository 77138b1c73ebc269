//! Upload policy for poster and headshot images.
//!
//! Every image handed to the external image host passes through
//! [`ImagePolicy::verify`] first.

use crate::error::CoreError;

/// Content types accepted for uploaded images.
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Maximum accepted image size in bytes (1 MiB).
pub const MAX_IMAGE_BYTES: usize = 1024 * 1024;

/// A file received from a multipart request, not yet verified.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// Declared `Content-Type` of the part, if the client sent one.
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Content-type allow-list plus size ceiling.
#[derive(Debug, Clone)]
pub struct ImagePolicy {
    allowed_types: Vec<String>,
    max_bytes: usize,
}

impl Default for ImagePolicy {
    fn default() -> Self {
        Self {
            allowed_types: ALLOWED_IMAGE_TYPES.iter().map(|t| t.to_string()).collect(),
            max_bytes: MAX_IMAGE_BYTES,
        }
    }
}

impl ImagePolicy {
    pub fn new(allowed_types: Vec<String>, max_bytes: usize) -> Self {
        Self {
            allowed_types,
            max_bytes,
        }
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Check the declared content type and size, handing back the raw bytes.
    pub fn verify(&self, image: UploadedImage) -> Result<Vec<u8>, CoreError> {
        let content_type = image.content_type.as_deref().unwrap_or("unknown");
        if !self.allowed_types.iter().any(|t| t == content_type) {
            return Err(CoreError::Validation(format!(
                "File type {content_type} not allowed. Allowed file types are {}",
                self.allowed_types.join(", ")
            )));
        }
        if image.bytes.len() > self.max_bytes {
            return Err(CoreError::Validation(format!(
                "File size {} bytes exceeds maximum of {} bytes",
                image.bytes.len(),
                self.max_bytes
            )));
        }
        Ok(image.bytes)
    }
}
