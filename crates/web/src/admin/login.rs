//! Admin Sign-In Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::Deserialize;
use tracing::info;

use vitrina_app::identity::Credentials;

use crate::{
    admin::{ADMIN_ROUTE, errors::identity_status_error},
    cookies::CookieStorage,
    extensions::*,
    state::State,
};

/// Sign-in form, accepted as JSON or url-encoded.
#[derive(Debug, Deserialize)]
pub(crate) struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Exchange credentials for a session cookie, then continue to the dashboard.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let form = req
        .parse_body::<LoginRequest>()
        .await
        .or_400("Email and password are required")?;

    let session = state
        .app
        .identity
        .sign_in_with_password(Credentials {
            email: form.email.trim().to_string(),
            password: form.password,
        })
        .await
        .map_err(identity_status_error)?;

    info!(user = %session.user.id, "admin signed in");

    res.add_cookie(CookieStorage::new(state.site.cookie_secure).session_cookie(session.access_token));
    res.render(Redirect::other(ADMIN_ROUTE));

    Ok(())
}
