//! Identity models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Email and password pair.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

/// An authenticated admin session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub user: IdentityUser,
}

/// The session as seen by route guards.
///
/// `loading` is set while the session could not be determined yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl SessionState {
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn loading() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }

    #[must_use]
    pub fn signed_in(session: Session) -> Self {
        Self {
            session: Some(session),
            loading: false,
        }
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.session.is_some()
    }
}
