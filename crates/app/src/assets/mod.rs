//! Client logo uploads to object storage.

mod errors;
pub mod object_storage;

pub use errors::AssetStorageError;
pub use object_storage::{ObjectStorageClient, ObjectStorageConfig};

use async_trait::async_trait;
use mockall::automock;

/// File extensions accepted for logos.
pub const ALLOWED_LOGO_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "svg"];

/// A logo file ready for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoUpload {
    /// Slug the logo belongs to; used as the object name prefix.
    pub slug: String,

    /// Original file name, used for its extension.
    pub file_name: String,

    pub content_type: Option<String>,

    pub bytes: Vec<u8>,
}

impl LogoUpload {
    /// Lowercased extension of the file name, if it is an accepted image type.
    ///
    /// # Errors
    ///
    /// Returns an error for a missing or unsupported extension.
    pub fn extension(&self) -> Result<String, AssetStorageError> {
        let extension = self
            .file_name
            .rsplit_once('.')
            .map(|(_, extension)| extension.to_ascii_lowercase())
            .ok_or_else(|| AssetStorageError::UnsupportedFile(self.file_name.clone()))?;

        if ALLOWED_LOGO_EXTENSIONS.contains(&extension.as_str()) {
            Ok(extension)
        } else {
            Err(AssetStorageError::UnsupportedFile(self.file_name.clone()))
        }
    }
}

#[automock]
#[async_trait]
pub trait AssetStorage: Send + Sync {
    /// Store a logo and return its public URL.
    async fn upload_logo(&self, upload: LogoUpload) -> Result<String, AssetStorageError>;
}
