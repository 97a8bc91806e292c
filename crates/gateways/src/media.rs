//! Image hosting via the ImageKit upload API.
//!
//! Listings and avatars arrive as base64 payloads, get uploaded through a
//! multipart POST, and are served back through the CDN with an on-the-fly
//! width/quality/format transformation.

use std::time::Duration;

use serde::Deserialize;

/// HTTP request timeout for a single upload.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default upload endpoint.
const DEFAULT_UPLOAD_URL: &str = "https://upload.imagekit.io/api/v1/files/upload";

/// Rendition width for car photos.
pub const CAR_IMAGE_WIDTH: u32 = 1280;

/// Rendition width for profile avatars.
pub const AVATAR_IMAGE_WIDTH: u32 = 400;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for media upload failures.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upload endpoint returned a non-2xx status code.
    #[error("Media upload returned HTTP {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// MediaConfig
// ---------------------------------------------------------------------------

/// Configuration for the image hosting service.
#[derive(Debug, Clone)]
pub struct MediaConfig {
    /// Private API key, the basic-auth username.
    pub private_key: String,
    /// CDN base URL that serves uploaded files.
    pub url_endpoint: String,
    /// Upload API URL.
    pub upload_url: String,
}

impl MediaConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `IMAGEKIT_PRIVATE_KEY` or `IMAGEKIT_URL_ENDPOINT`
    /// is not set, signalling that image hosting is not configured.
    ///
    /// | Variable                | Required | Default                                        |
    /// |-------------------------|----------|------------------------------------------------|
    /// | `IMAGEKIT_PRIVATE_KEY`  | yes      | —                                              |
    /// | `IMAGEKIT_URL_ENDPOINT` | yes      | —                                              |
    /// | `IMAGEKIT_UPLOAD_URL`   | no       | `https://upload.imagekit.io/api/v1/files/upload` |
    pub fn from_env() -> Option<Self> {
        let private_key = std::env::var("IMAGEKIT_PRIVATE_KEY").ok()?;
        let url_endpoint = std::env::var("IMAGEKIT_URL_ENDPOINT").ok()?;
        Some(Self {
            private_key,
            url_endpoint,
            upload_url: std::env::var("IMAGEKIT_UPLOAD_URL")
                .unwrap_or_else(|_| DEFAULT_UPLOAD_URL.to_string()),
        })
    }
}

// ---------------------------------------------------------------------------
// MediaClient
// ---------------------------------------------------------------------------

/// Response subset from the upload API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    /// Direct URL of the stored original.
    pub url: String,
    /// Path component used to build transformation URLs.
    pub file_path: String,
}

/// Uploads images and builds optimized CDN URLs.
pub struct MediaClient {
    config: MediaConfig,
    client: reqwest::Client,
}

impl MediaClient {
    /// Create a client with a pre-configured HTTP transport.
    pub fn new(config: MediaConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { config, client }
    }

    /// Upload a base64-encoded image into `folder`.
    pub async fn upload_base64(
        &self,
        base64_data: &str,
        file_name: &str,
        folder: &str,
    ) -> Result<UploadedFile, MediaError> {
        let form = reqwest::multipart::Form::new()
            .text("file", base64_data.to_string())
            .text("fileName", file_name.to_string())
            .text("folder", folder.to_string());

        let response = self
            .client
            .post(&self.config.upload_url)
            .basic_auth(&self.config.private_key, Some(""))
            .multipart(form)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(MediaError::HttpStatus(response.status().as_u16()));
        }

        let uploaded = response.json::<UploadedFile>().await?;
        tracing::info!(file_path = %uploaded.file_path, "Image uploaded");
        Ok(uploaded)
    }

    /// CDN URL for `file_path` with width, auto quality, and webp applied.
    pub fn optimized_url(&self, file_path: &str, width: u32) -> String {
        format!(
            "{}/tr:w-{},q-auto,f-webp{}",
            self.config.url_endpoint.trim_end_matches('/'),
            width,
            file_path
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> MediaConfig {
        MediaConfig {
            private_key: "private_key".to_string(),
            url_endpoint: "https://ik.imagekit.io/rentaride/".to_string(),
            upload_url: DEFAULT_UPLOAD_URL.to_string(),
        }
    }

    #[test]
    fn from_env_returns_none_without_private_key() {
        std::env::remove_var("IMAGEKIT_PRIVATE_KEY");
        assert!(MediaConfig::from_env().is_none());
    }

    #[test]
    fn optimized_url_applies_transformation() {
        let client = MediaClient::new(test_config());
        let url = client.optimized_url("/cars/corolla.jpg", CAR_IMAGE_WIDTH);
        assert_eq!(
            url,
            "https://ik.imagekit.io/rentaride/tr:w-1280,q-auto,f-webp/cars/corolla.jpg"
        );
    }

    #[test]
    fn optimized_url_avatar_width() {
        let client = MediaClient::new(test_config());
        let url = client.optimized_url("/users/avatar.png", AVATAR_IMAGE_WIDTH);
        assert!(url.contains("tr:w-400,q-auto,f-webp"));
    }

    #[test]
    fn uploaded_file_parses_with_extra_fields() {
        let json = r#"{
            "fileId": "abc123",
            "url": "https://ik.imagekit.io/rentaride/cars/corolla.jpg",
            "filePath": "/cars/corolla.jpg",
            "height": 720,
            "width": 1280
        }"#;
        let uploaded: UploadedFile = serde_json::from_str(json).unwrap();
        assert_eq!(uploaded.file_path, "/cars/corolla.jpg");
    }

    #[test]
    fn media_error_display_http_status() {
        let err = MediaError::HttpStatus(413);
        assert_eq!(err.to_string(), "Media upload returned HTTP 413");
    }
}
