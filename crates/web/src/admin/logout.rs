//! Admin Sign-Out Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::warn;

use vitrina_app::guards::LOGIN_ROUTE;

use crate::{
    cookies::{ADMIN_SESSION_COOKIE, removal},
    extensions::*,
    state::State,
};

/// Revoke the session if there is one and drop the cookie either way.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let token = req
        .cookie(ADMIN_SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty());

    if let Some(token) = token
        && let Err(error) = state.app.identity.sign_out(token).await
    {
        warn!("failed to revoke admin session: {error}");
    }

    res.add_cookie(removal(ADMIN_SESSION_COOKIE));
    res.render(Redirect::other(LOGIN_ROUTE));

    Ok(())
}
