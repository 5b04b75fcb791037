//! Test helpers.

use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use jiff::Timestamp;
use salvo::{affix_state::inject, http::cookie::Cookie, prelude::*};
use uuid::Uuid;

use vitrina_app::{
    assets::MockAssetStorage,
    context::AppContext,
    domain::clients::{
        MockClientsService,
        records::{ClientRecord, ClientUuid},
    },
    identity::{IdentityUser, MockIdentityProvider, Session},
    translations::Language,
    visitor::BrandDefaults,
};

use crate::{
    router::site_router,
    state::{SiteSettings, State},
};

pub(crate) const ADMIN_TOKEN: &str = "admin-jwt";

pub(crate) const PUBLIC_BASE_URL: &str = "https://studio.example";

/// Service mocks; any call without an expectation fails the test.
#[derive(Default)]
pub(crate) struct Mocks {
    pub(crate) clients: MockClientsService,
    pub(crate) identity: MockIdentityProvider,
    pub(crate) assets: MockAssetStorage,

    /// Operator brand configured for the site.
    pub(crate) brand: BrandDefaults,
}

impl Mocks {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(
            AppContext::new(
                Arc::new(self.clients),
                Arc::new(self.identity),
                Arc::new(self.assets),
            ),
            SiteSettings {
                brand_defaults: self.brand,
                public_base_url: PUBLIC_BASE_URL.to_string(),
                ..SiteSettings::default()
            },
        )
    }

    /// The full site router over these mocks.
    pub(crate) fn into_site(self) -> Service {
        Service::new(Router::new().hoop(inject(self.into_state())).push(site_router()))
    }
}

pub(crate) fn admin_session() -> Session {
    Session {
        access_token: ADMIN_TOKEN.to_string(),
        user: IdentityUser {
            id: Uuid::nil(),
            email: Some("admin@studio.mx".to_string()),
        },
    }
}

/// Identity mock that recognises [`ADMIN_TOKEN`] on every request.
pub(crate) fn admin_identity() -> MockIdentityProvider {
    let mut identity = MockIdentityProvider::new();

    identity
        .expect_current_session()
        .withf(|token| token == ADMIN_TOKEN)
        .returning(|_| Ok(Some(admin_session())));

    identity
}

pub(crate) fn admin_cookie() -> String {
    format!("{}={ADMIN_TOKEN}", crate::cookies::ADMIN_SESSION_COOKIE)
}

pub(crate) fn make_client(slug: &str, name: &str) -> ClientRecord {
    ClientRecord {
        uuid: ClientUuid::from_uuid(Uuid::now_v7()),
        slug: slug.to_string(),
        name: name.to_string(),
        email: format!("hola@{slug}.mx"),
        logo: String::new(),
        logo_scale: 100,
        invert_logo: false,
        language: Language::Es,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

/// A `Cookie` header value carrying one visitor storage key.
pub(crate) fn encoded_cookie(key: &str, value: &str) -> String {
    format!("{key}={}", URL_SAFE_NO_PAD.encode(value))
}

fn is_removal(cookie: &Cookie<'_>) -> bool {
    cookie.max_age().is_some_and(|age| age.is_zero())
}

/// Decoded value of a visitor cookie set on `res`; `None` when absent or expired.
pub(crate) fn decoded_cookie(res: &Response, key: &str) -> Option<String> {
    let cookie = res.cookie(key).filter(|cookie| !is_removal(cookie))?;
    let bytes = URL_SAFE_NO_PAD.decode(cookie.value()).ok()?;

    String::from_utf8(bytes).ok()
}

/// Replay the cookies `res` set as a request `Cookie` header.
pub(crate) fn cookie_header(res: &Response) -> String {
    res.cookies()
        .iter()
        .filter(|cookie| !is_removal(cookie))
        .map(|cookie| format!("{}={}", cookie.name(), cookie.value()))
        .collect::<Vec<_>>()
        .join("; ")
}
