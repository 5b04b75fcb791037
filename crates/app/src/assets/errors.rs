//! Asset storage errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetStorageError {
    #[error("unsupported logo file {0:?}")]
    UnsupportedFile(String),

    #[error("logo file is empty")]
    EmptyFile,

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response from object storage: {0}")]
    UnexpectedResponse(String),
}
