//! Visitor storage carried in cookies.
//!
//! Each storage key travels as its own cookie. Values are base64url encoded on
//! the wire only; the storage layer always sees the literal strings.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use salvo::{
    http::cookie::{Cookie, SameSite},
    prelude::{Request, Response},
};
use tracing::debug;

use vitrina_app::visitor::{MemoryStorage, StorageChange, keys};

/// Cookie holding the admin's identity-service access token.
pub(crate) const ADMIN_SESSION_COOKIE: &str = "admin_session";

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct CookieStorage {
    secure: bool,
}

impl CookieStorage {
    #[must_use]
    pub(crate) fn new(secure: bool) -> Self {
        Self { secure }
    }

    /// Seed a storage namespace from the request's visitor cookies.
    ///
    /// Cookies that fail to decode are ignored.
    #[must_use]
    pub(crate) fn load(req: &Request) -> MemoryStorage {
        MemoryStorage::seeded(keys::ALL.iter().filter_map(|key| {
            let cookie = req.cookie(key)?;

            match decode(cookie.value()) {
                Some(value) => Some((*key, value)),
                None => {
                    debug!(cookie = key, "ignoring undecodable visitor cookie");

                    None
                }
            }
        }))
    }

    /// Write every change recorded in `storage` as a `Set-Cookie`.
    pub(crate) fn flush(self, storage: &MemoryStorage, res: &mut Response) {
        for change in storage.take_changes() {
            match change {
                StorageChange::Set { key, value } => {
                    res.add_cookie(self.cookie(key, encode(&value)));
                }
                StorageChange::Removed { key } => {
                    res.add_cookie(removal(key));
                }
            }
        }
    }

    /// A long-lived, script-inaccessible cookie scoped to the whole site.
    #[must_use]
    pub(crate) fn cookie(self, name: impl Into<String>, value: String) -> Cookie<'static> {
        Cookie::build((name.into(), value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .permanent()
            .build()
    }

    #[must_use]
    pub(crate) fn session_cookie(self, access_token: String) -> Cookie<'static> {
        self.cookie(ADMIN_SESSION_COOKIE, access_token)
    }
}

/// Expire a cookie previously set with [`CookieStorage::cookie`].
#[must_use]
pub(crate) fn removal(name: impl Into<String>) -> Cookie<'static> {
    let mut cookie = Cookie::build((name.into(), String::new())).path("/").build();

    cookie.make_removal();

    cookie
}

fn encode(value: &str) -> String {
    URL_SAFE_NO_PAD.encode(value)
}

fn decode(value: &str) -> Option<String> {
    let bytes = URL_SAFE_NO_PAD.decode(value).ok()?;

    String::from_utf8(bytes).ok()
}
