//! Save Client Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, QueryParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use vitrina_app::{
    domain::clients::data::ClientUpsert, translations::Language, visitor::brand::DEFAULT_LOGO_SCALE,
};

use crate::{
    admin::{errors::clients_status_error, views::ClientView},
    extensions::*,
    state::State,
};

/// Generator form payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SaveClientRequest {
    pub name: String,

    /// Derived from the name when blank; ignored in edit mode.
    #[serde(default)]
    pub slug: String,

    #[serde(default)]
    pub email: String,

    /// Logo URL or inline SVG.
    #[serde(default)]
    pub logo: String,

    pub logo_scale: Option<i32>,

    #[serde(default)]
    pub invert_logo: bool,

    /// `en` or `es`; defaults to `es`.
    pub language: Option<String>,
}

impl SaveClientRequest {
    fn into_upsert(self, edit: Option<String>) -> Result<ClientUpsert, StatusError> {
        let language = match self.language.as_deref().map(str::trim) {
            None | Some("") => Language::default(),
            Some(code) => Language::parse(code)
                .ok_or_else(|| StatusError::bad_request().brief("Language must be en or es"))?,
        };

        Ok(ClientUpsert {
            slug: edit.unwrap_or(self.slug),
            name: self.name,
            email: self.email,
            logo: self.logo,
            logo_scale: self.logo_scale.unwrap_or(DEFAULT_LOGO_SCALE),
            invert_logo: self.invert_logo,
            language,
        })
    }
}

/// Saved client, with the link to share.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SaveClientResponse {
    pub client: ClientView,
}

/// Create or update a client
///
/// With `?edit={slug}` the slug is fixed to the client being edited.
#[endpoint(
    tags("clients"),
    summary = "Save Client",
    responses(
        (status_code = StatusCode::OK, description = "Client saved"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid client payload"),
        (status_code = StatusCode::CONFLICT, description = "Slug already taken"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    edit: QueryParam<String, false>,
    json: JsonBody<SaveClientRequest>,
    depot: &mut Depot,
) -> Result<Json<SaveClientResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let edit = edit.into_inner().filter(|slug| !slug.trim().is_empty());
    let upsert = json.into_inner().into_upsert(edit)?;

    let client = state
        .app
        .clients
        .upsert_client(upsert)
        .await
        .map_err(clients_status_error)?;

    Ok(Json(SaveClientResponse {
        client: ClientView::new(&client, &state.site),
    }))
}
