//! State

use std::sync::Arc;

use vitrina_app::{context::AppContext, domain::clients::records::ClientRecord, visitor::BrandDefaults};

/// Site-wide settings that are not backend services.
#[derive(Debug, Clone, Default)]
pub(crate) struct SiteSettings {
    /// Operator brand used beneath anything a visitor has stored.
    pub(crate) brand_defaults: BrandDefaults,

    /// Public origin, without a trailing slash.
    pub(crate) public_base_url: String,

    pub(crate) cookie_secure: bool,
}

impl SiteSettings {
    /// Tokenised link handed to a client: `{base}/{slug}?token={id}`.
    #[must_use]
    pub(crate) fn share_link(&self, client: &ClientRecord) -> String {
        format!(
            "{}/{}?token={}",
            self.public_base_url.trim_end_matches('/'),
            client.slug,
            client.uuid
        )
    }
}

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) site: SiteSettings,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, site: SiteSettings) -> Self {
        Self { app, site }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, site: SiteSettings) -> Arc<Self> {
        Arc::new(Self::new(app, site))
    }
}
