//! Logo Upload Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use vitrina_app::assets::LogoUpload;

use crate::{admin::errors::assets_status_error, extensions::*, state::State};

/// Uploaded logo location.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LogoUploadedResponse {
    /// Public URL to store as the client's logo.
    pub url: String,
}

/// Upload a client logo
///
/// Multipart form with a `logo` file and an optional `slug` used to name it.
#[endpoint(
    tags("clients"),
    summary = "Upload Logo",
    responses(
        (status_code = StatusCode::OK, description = "Logo uploaded"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing or unsupported file"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Object storage failed"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<LogoUploadedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let slug = req.form::<String>("slug").await.unwrap_or_default();

    let Some(file) = req.file("logo").await else {
        return Err(StatusError::bad_request().brief("A logo file is required"));
    };

    let upload = LogoUpload {
        slug,
        file_name: file.name().unwrap_or_default().to_string(),
        content_type: file.content_type().map(|mime| mime.to_string()),
        bytes: tokio::fs::read(file.path())
            .await
            .or_500("failed to read uploaded logo")?,
    };

    let url = state
        .app
        .assets
        .upload_logo(upload)
        .await
        .map_err(assets_status_error)?;

    Ok(Json(LogoUploadedResponse { url }))
}
