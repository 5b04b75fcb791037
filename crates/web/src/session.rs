//! Session middleware.
//!
//! Resolves the `admin_session` cookie to a [`SessionState`] in the depot.

use std::sync::Arc;

use salvo::prelude::*;
use tracing::warn;

use vitrina_app::identity::{IdentityError, SessionState};

use crate::{
    cookies::{ADMIN_SESSION_COOKIE, removal},
    extensions::*,
    state::State,
};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => Arc::clone(state),
        Err(error) => {
            res.render(error);

            return;
        }
    };

    let token = req
        .cookie(ADMIN_SESSION_COOKIE)
        .map(|cookie| cookie.value().trim().to_string())
        .filter(|token| !token.is_empty());

    let session = match token {
        None => SessionState::anonymous(),
        Some(token) => match state.app.identity.current_session(token).await {
            Ok(Some(session)) => SessionState::signed_in(session),
            Ok(None) | Err(IdentityError::Rejected(_)) => {
                res.add_cookie(removal(ADMIN_SESSION_COOKIE));

                SessionState::anonymous()
            }
            Err(error) => {
                warn!("could not reach identity service: {error}");

                SessionState::loading()
            }
        },
    };

    depot.inject(session);

    ctrl.call_next(req, depot, res).await;
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        http::header::COOKIE,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;
    use vitrina_app::identity::MockIdentityProvider;

    use crate::test_helpers::{ADMIN_TOKEN, Mocks, admin_session};

    use super::*;

    #[salvo::handler]
    async fn echo_session(depot: &mut Depot, res: &mut Response) {
        let session = depot.session_state();

        let label = if session.loading {
            "loading"
        } else if session.is_admin() {
            "admin"
        } else {
            "anonymous"
        };

        res.render(label);
    }

    fn make_service(identity: MockIdentityProvider) -> Service {
        let state = Mocks {
            identity,
            ..Mocks::default()
        }
        .into_state();

        Service::new(
            Router::new()
                .hoop(inject(state))
                .hoop(handler)
                .push(Router::new().get(echo_session)),
        )
    }

    async fn label(identity: MockIdentityProvider, cookie: Option<&str>) -> TestResult<String> {
        let mut request = TestClient::get("http://example.com");

        if let Some(cookie) = cookie {
            request = request.add_header(COOKIE, cookie, true);
        }

        Ok(request.send(&make_service(identity)).await.take_string().await?)
    }

    #[tokio::test]
    async fn test_missing_cookie_skips_identity_lookup() -> TestResult {
        let mut identity = MockIdentityProvider::new();

        identity.expect_current_session().never();

        assert_eq!(label(identity, None).await?, "anonymous");

        Ok(())
    }

    #[tokio::test]
    async fn test_valid_cookie_signs_in() -> TestResult {
        let mut identity = MockIdentityProvider::new();

        identity
            .expect_current_session()
            .once()
            .withf(|token| token == ADMIN_TOKEN)
            .return_once(|_| Ok(Some(admin_session())));

        let cookie = format!("{ADMIN_SESSION_COOKIE}={ADMIN_TOKEN}");

        assert_eq!(label(identity, Some(&cookie)).await?, "admin");

        Ok(())
    }

    #[tokio::test]
    async fn test_expired_cookie_is_anonymous_and_cleared() -> TestResult {
        let mut identity = MockIdentityProvider::new();

        identity
            .expect_current_session()
            .once()
            .return_once(|_| Ok(None));

        let res = TestClient::get("http://example.com")
            .add_header(COOKIE, format!("{ADMIN_SESSION_COOKIE}=stale"), true)
            .send(&make_service(identity))
            .await;

        let cleared = res
            .cookie(ADMIN_SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string());

        assert_eq!(cleared.as_deref(), Some(""));

        Ok(())
    }

    #[tokio::test]
    async fn test_unreachable_identity_service_is_loading() -> TestResult {
        let mut identity = MockIdentityProvider::new();

        identity
            .expect_current_session()
            .once()
            .return_once(|_| Err(IdentityError::UnexpectedResponse("503".to_string())));

        let cookie = format!("{ADMIN_SESSION_COOKIE}={ADMIN_TOKEN}");

        assert_eq!(label(identity, Some(&cookie)).await?, "loading");

        Ok(())
    }
}
