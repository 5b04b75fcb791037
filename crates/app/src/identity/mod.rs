//! Admin identity: sessions issued by a hosted authentication service.

mod errors;
pub mod gotrue;
mod models;

pub use errors::IdentityError;
pub use gotrue::{GoTrueClient, GoTrueConfig};
pub use models::*;

use async_trait::async_trait;
use mockall::automock;

#[automock]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Register a new admin account.
    async fn sign_up(&self, credentials: Credentials) -> Result<IdentityUser, IdentityError>;

    /// Exchange email and password for a session.
    async fn sign_in_with_password(
        &self,
        credentials: Credentials,
    ) -> Result<Session, IdentityError>;

    /// Revoke the session behind `access_token`.
    async fn sign_out(&self, access_token: String) -> Result<(), IdentityError>;

    /// Resolve an access token to its session; `Ok(None)` when it is no longer valid.
    async fn current_session(&self, access_token: String)
    -> Result<Option<Session>, IdentityError>;
}
