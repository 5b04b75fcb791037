//! Client view models shared by admin pages and endpoints.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vitrina_app::domain::clients::records::ClientRecord;

use crate::state::SiteSettings;

/// A client as shown to admins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ClientView {
    /// Client id; doubles as the access token.
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub email: String,
    pub logo: String,
    pub logo_scale: i32,
    pub invert_logo: bool,
    pub language: String,

    /// RFC 3339 creation time.
    pub created_at: String,

    /// Tokenised link to hand to the client.
    pub share_link: String,
}

impl ClientView {
    #[must_use]
    pub(crate) fn new(client: &ClientRecord, site: &SiteSettings) -> Self {
        Self {
            id: client.uuid.into_uuid(),
            slug: client.slug.clone(),
            name: client.name.clone(),
            email: client.email.clone(),
            logo: client.logo.clone(),
            logo_scale: client.logo_scale,
            invert_logo: client.invert_logo,
            language: client.language.code().to_string(),
            created_at: client.created_at.to_string(),
            share_link: site.share_link(client),
        }
    }
}
