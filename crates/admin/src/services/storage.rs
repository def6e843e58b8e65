//! Cloudflare Images client.
//!
//! Proxies admin media uploads to the Cloudflare Images REST API so the
//! delivery URLs can be stored on products, categories and settings. The
//! API token never reaches the browser.

use reqwest::Client;
use reqwest::multipart::{Form, Part};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use crate::config::CloudflareConfig;

/// Cloudflare API base URL.
const CLOUDFLARE_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Error type for storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("response could not be parsed: {0}")]
    Response(String),
    #[error("cloudflare error: {0}")]
    Api(String),
}

/// A stored media object as reported by Cloudflare.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedMedia {
    /// Cloudflare image ID (used for deletion).
    pub id: String,
    /// Original filename.
    pub filename: String,
    /// Delivery URLs, one per configured variant.
    pub variants: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    success: bool,
    result: Option<T>,
    #[serde(default)]
    errors: Vec<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// Client for the Cloudflare Images API.
#[derive(Clone)]
pub struct MediaStorage {
    client: Client,
    account_id: String,
    api_token: SecretString,
}

impl std::fmt::Debug for MediaStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaStorage")
            .field("account_id", &self.account_id)
            .field("api_token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl MediaStorage {
    /// Create a new media storage client.
    #[must_use]
    pub fn new(config: &CloudflareConfig) -> Self {
        Self {
            client: Client::new(),
            account_id: config.account_id.clone(),
            api_token: config.api_token.clone(),
        }
    }

    /// Upload one file to Cloudflare Images.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or Cloudflare reports an error.
    #[instrument(skip(self, bytes), fields(filename = %filename, size = bytes.len()))]
    pub async fn upload(
        &self,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedMedia, StorageError> {
        let part = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(content_type)
            .map_err(|e| StorageError::Request(e.to_string()))?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(format!(
                "{CLOUDFLARE_API_BASE}/accounts/{}/images/v1",
                self.account_id
            ))
            .bearer_auth(self.api_token.expose_secret())
            .multipart(form)
            .send()
            .await
            .map_err(|e| StorageError::Request(e.to_string()))?;

        let envelope: ApiEnvelope<UploadedMedia> = response
            .json()
            .await
            .map_err(|e| StorageError::Response(e.to_string()))?;

        if !envelope.success {
            let message = envelope
                .errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            error!(error = %message, "Cloudflare upload failed");
            return Err(StorageError::Api(message));
        }

        let media = envelope
            .result
            .ok_or_else(|| StorageError::Response("missing result".to_string()))?;

        debug!(id = %media.id, "Media uploaded");
        Ok(media)
    }

    /// Delete an uploaded image by its Cloudflare ID.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or Cloudflare reports an error.
    #[instrument(skip(self))]
    pub async fn delete(&self, image_id: &str) -> Result<(), StorageError> {
        let response = self
            .client
            .delete(format!(
                "{CLOUDFLARE_API_BASE}/accounts/{}/images/v1/{image_id}",
                self.account_id
            ))
            .bearer_auth(self.api_token.expose_secret())
            .send()
            .await
            .map_err(|e| StorageError::Request(e.to_string()))?;

        let envelope: ApiEnvelope<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| StorageError::Response(e.to_string()))?;

        if !envelope.success {
            let message = envelope
                .errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            error!(error = %message, "Cloudflare delete failed");
            return Err(StorageError::Api(message));
        }

        Ok(())
    }
}
