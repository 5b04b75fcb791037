//! HTTP client for the backend's object storage API.

use async_trait::async_trait;
use jiff::Timestamp;
use reqwest::{Client, header::CONTENT_TYPE};
use tracing::info;

use crate::{
    assets::{AssetStorage, AssetStorageError, LogoUpload},
    domain::clients::slug::finalize_slug,
};

const LOGO_PREFIX: &str = "client-logos";

#[derive(Debug, Clone)]
pub struct ObjectStorageConfig {
    /// Backend base URL.
    pub url: String,

    /// Key authorising writes to the bucket.
    pub api_key: String,

    /// Public bucket holding client assets.
    pub bucket: String,
}

#[derive(Debug, Clone)]
pub struct ObjectStorageClient {
    config: ObjectStorageConfig,
    http: Client,
}

impl ObjectStorageClient {
    #[must_use]
    pub fn new(config: ObjectStorageConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn base(&self) -> &str {
        self.config.url.trim_end_matches('/')
    }

    fn upload_url(&self, object: &str) -> String {
        format!("{}/storage/v1/object/{}/{object}", self.base(), self.config.bucket)
    }

    /// Publicly readable URL of an object.
    #[must_use]
    pub fn public_url(&self, object: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{object}",
            self.base(),
            self.config.bucket
        )
    }
}

/// Object name for a logo: `client-logos/{slug}-{millis}.{ext}`.
fn logo_object_name(slug: &str, uploaded_at: Timestamp, extension: &str) -> String {
    let slug = finalize_slug(slug);
    let slug = if slug.is_empty() { "logo" } else { slug.as_str() };

    format!(
        "{LOGO_PREFIX}/{slug}-{}.{extension}",
        uploaded_at.as_millisecond()
    )
}

#[async_trait]
impl AssetStorage for ObjectStorageClient {
    async fn upload_logo(&self, upload: LogoUpload) -> Result<String, AssetStorageError> {
        let extension = upload.extension()?;

        if upload.bytes.is_empty() {
            return Err(AssetStorageError::EmptyFile);
        }

        let object = logo_object_name(&upload.slug, Timestamp::now(), &extension);
        let content_type = upload
            .content_type
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let response = self
            .http
            .post(self.upload_url(&object))
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .header("x-upsert", "true")
            .header(CONTENT_TYPE, content_type)
            .body(upload.bytes)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(AssetStorageError::UnexpectedResponse(format!(
                "logo upload failed with status {status}: {text}"
            )));
        }

        info!(object = %object, "logo uploaded");

        Ok(self.public_url(&object))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ObjectStorageClient {
        ObjectStorageClient::new(ObjectStorageConfig {
            url: "https://backend.example/".to_string(),
            api_key: "service".to_string(),
            bucket: "public_assets".to_string(),
        })
    }

    #[test]
    fn object_name_uses_slug_and_millis() {
        let at = Timestamp::from_millisecond(1_700_000_000_123).unwrap_or(Timestamp::UNIX_EPOCH);

        assert_eq!(
            logo_object_name("Acme Studio", at, "png"),
            "client-logos/acmestudio-1700000000123.png"
        );
        assert_eq!(
            logo_object_name("", Timestamp::UNIX_EPOCH, "svg"),
            "client-logos/logo-0.svg"
        );
    }

    #[test]
    fn upload_and_public_urls() {
        let client = client();

        assert_eq!(
            client.upload_url("client-logos/a-1.png"),
            "https://backend.example/storage/v1/object/public_assets/client-logos/a-1.png"
        );
        assert_eq!(
            client.public_url("client-logos/a-1.png"),
            "https://backend.example/storage/v1/object/public/public_assets/client-logos/a-1.png"
        );
    }

    #[tokio::test]
    async fn empty_and_unsupported_uploads_fail_before_any_request() {
        let client = client();

        let empty = client
            .upload_logo(LogoUpload {
                slug: "acme".to_string(),
                file_name: "logo.png".to_string(),
                content_type: None,
                bytes: Vec::new(),
            })
            .await;

        let unsupported = client
            .upload_logo(LogoUpload {
                slug: "acme".to_string(),
                file_name: "logo.tiff".to_string(),
                content_type: None,
                bytes: vec![0],
            })
            .await;

        assert!(matches!(empty, Err(AssetStorageError::EmptyFile)));
        assert!(matches!(unsupported, Err(AssetStorageError::UnsupportedFile(_))));
    }
}
