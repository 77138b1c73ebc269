//! Cloudinary-backed [`ImageStore`].
//!
//! Uses the signed upload API: every request carries `api_key`, `timestamp`
//! and a SHA-256 `signature` over the remaining parameters.

use std::time::Duration;

use async_trait::async_trait;
use duo_core::types::ImageRef;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use super::{ImageStore, ImageStoreError};

const API_BASE: &str = "https://api.cloudinary.com/v1_1";
const DELIVERY_BASE: &str = "https://res.cloudinary.com";

/// HTTP timeout for a single upload or destroy call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Credentials and target folder for the Cloudinary account.
#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    /// Folder uploads are placed in, if any.
    pub folder: Option<String>,
}

impl CloudinaryConfig {
    /// Load Cloudinary configuration from environment variables.
    ///
    /// | Env Var             | Required | Format                                   |
    /// |---------------------|----------|------------------------------------------|
    /// | `CLOUDINARY_URL`    | **yes**  | `cloudinary://<key>:<secret>@<cloud>`    |
    /// | `CLOUDINARY_FOLDER` | no       | folder name                              |
    ///
    /// # Panics
    ///
    /// Panics if `CLOUDINARY_URL` is missing or malformed.
    pub fn from_env() -> Self {
        let url = std::env::var("CLOUDINARY_URL").expect("CLOUDINARY_URL must be set");
        let folder = std::env::var("CLOUDINARY_FOLDER")
            .ok()
            .filter(|s| !s.is_empty());
        Self::from_url(&url, folder)
            .expect("CLOUDINARY_URL must look like cloudinary://<key>:<secret>@<cloud>")
    }

    /// Parse a `cloudinary://<key>:<secret>@<cloud>` URL.
    pub fn from_url(url: &str, folder: Option<String>) -> Option<Self> {
        let rest = url.strip_prefix("cloudinary://")?;
        let (credentials, cloud_name) = rest.rsplit_once('@')?;
        let (api_key, api_secret) = credentials.split_once(':')?;
        if api_key.is_empty() || api_secret.is_empty() || cloud_name.is_empty() {
            return None;
        }
        Some(Self {
            cloud_name: cloud_name.to_string(),
            api_key: api_key.to_string(),
            api_secret: api_secret.to_string(),
            folder,
        })
    }
}

/// Signature over request parameters: sorted `k=v` pairs joined by `&`,
/// followed by the API secret, hashed with SHA-256 (hex).
pub fn sign(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut sorted = params.to_vec();
    sorted.sort_by(|a, b| a.0.cmp(b.0));
    let joined = sorted
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(joined.as_bytes());
    hasher.update(api_secret.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[derive(Deserialize)]
struct UploadResponse {
    public_id: String,
}

#[derive(Deserialize)]
struct DestroyResponse {
    result: String,
}

pub struct CloudinaryImageStore {
    client: reqwest::Client,
    config: CloudinaryConfig,
}

impl CloudinaryImageStore {
    pub fn new(config: CloudinaryConfig) -> Result<Self, ImageStoreError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self, action: &str) -> String {
        format!("{API_BASE}/{}/image/{action}", self.config.cloud_name)
    }

    /// Form carrying `params` plus the credentials and signature.
    fn signed_form(&self, params: &[(&str, &str)]) -> Form {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let mut signed: Vec<(&str, &str)> = params.to_vec();
        signed.push(("timestamp", &timestamp));
        let signature = sign(&signed, &self.config.api_secret);

        let mut form = Form::new();
        for (k, v) in signed {
            form = form.text(k.to_string(), v.to_string());
        }
        form.text("api_key", self.config.api_key.clone())
            .text("signature", signature)
            .text("signature_algorithm", "sha256")
    }
}

#[async_trait]
impl ImageStore for CloudinaryImageStore {
    async fn upload(&self, bytes: Vec<u8>) -> Result<ImageRef, ImageStoreError> {
        let size = bytes.len();
        let mut params = Vec::new();
        if let Some(folder) = &self.config.folder {
            params.push(("folder", folder.as_str()));
        }
        let form = self
            .signed_form(&params)
            .part("file", Part::bytes(bytes).file_name("upload"));

        let response: UploadResponse = self
            .client
            .post(self.endpoint("upload"))
            .multipart(form)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        tracing::info!(reference = %response.public_id, size, "Uploaded image");
        Ok(response.public_id)
    }

    async fn delete(&self, reference: &str) -> Result<(), ImageStoreError> {
        let form = self.signed_form(&[("public_id", reference)]);

        let response: DestroyResponse = self
            .client
            .post(self.endpoint("destroy"))
            .multipart(form)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if response.result != "ok" {
            return Err(ImageStoreError::Rejected {
                operation: "destroy",
                detail: response.result,
            });
        }
        tracing::info!(reference, "Deleted image");
        Ok(())
    }

    fn resolve_url(&self, reference: &str) -> Result<String, ImageStoreError> {
        if reference.trim().is_empty() {
            return Err(ImageStoreError::Rejected {
                operation: "resolve_url",
                detail: "empty reference".to_string(),
            });
        }
        Ok(format!(
            "{DELIVERY_BASE}/{}/image/upload/{reference}",
            self.config.cloud_name
        ))
    }
}
