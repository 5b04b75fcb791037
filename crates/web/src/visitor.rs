//! Visitor storage middleware.

use std::sync::Arc;

use salvo::prelude::*;

use vitrina_app::visitor::{MemoryStorage, VisitorContext};

use crate::{cookies::CookieStorage, extensions::*, state::State};

/// Brand and access stores for the current request.
pub(crate) type Visitor = VisitorContext<MemoryStorage>;

/// Load the visitor's stores from cookies, run the rest of the chain, then
/// write back whatever changed.
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

    let storage = CookieStorage::load(req);

    depot.inject(Visitor::load(storage.clone(), &state.site.brand_defaults));

    ctrl.call_next(req, depot, res).await;

    CookieStorage::new(state.site.cookie_secure).flush(&storage, res);
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        http::header::COOKIE,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;
    use vitrina_app::visitor::{BrandPatch, keys};

    use crate::test_helpers::{Mocks, encoded_cookie};

    use super::*;

    #[salvo::handler]
    async fn switch_to_english(depot: &mut Depot, res: &mut Response) {
        let Ok(visitor) = depot.visitor_mut_or_500() else {
            res.render(StatusError::internal_server_error());

            return;
        };

        let before = visitor.brand.get().name.clone();

        visitor.brand.set(BrandPatch {
            language: Some(vitrina_app::translations::Language::En),
            ..BrandPatch::default()
        });

        res.render(before);
    }

    #[tokio::test]
    async fn test_cookies_load_into_stores_and_changes_flush_back() -> TestResult {
        let service = Service::new(
            Router::new()
                .hoop(inject(Mocks::default().into_state()))
                .hoop(handler)
                .push(Router::new().get(switch_to_english)),
        );

        let mut res = TestClient::get("http://example.com")
            .add_header(COOKIE, encoded_cookie(keys::BRAND_NAME, "Acme"), true)
            .send(&service)
            .await;

        let language = res.cookie(keys::BRAND_LANG).map(|cookie| cookie.value().to_string());

        assert_eq!(res.take_string().await?, "Acme");
        assert!(language.is_some());
        assert!(res.cookie(keys::BRAND_NAME).is_none());

        Ok(())
    }
}
