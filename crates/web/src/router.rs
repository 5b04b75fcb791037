//! Site Router

use salvo::Router;

use crate::{admin, guards, pages, session, tenant, visitor};

/// Public, tenant and admin routes.
///
/// Static segments are pushed before `{slug}` so they are never taken for a
/// tenant; `{**rest}` catches everything left.
pub fn site_router() -> Router {
    Router::new()
        .hoop(session::handler)
        .hoop(visitor::handler)
        .push(
            Router::with_path("login")
                .get(pages::public::login)
                .post(admin::login::handler),
        )
        .push(Router::with_path("logout").post(admin::logout::handler))
        .push(Router::with_path("unauthorized").get(pages::public::unauthorized))
        .push(
            Router::with_path("generator")
                .hoop(guards::admin)
                .get(pages::admin::generator)
                .post(admin::generator::handler)
                .push(Router::with_path("preview").patch(admin::preview::handler))
                .push(Router::with_path("logo").post(admin::logo::handler)),
        )
        .push(
            Router::with_path("admin")
                .hoop(guards::admin)
                .get(pages::admin::dashboard)
                .push(Router::with_path("clients/{slug}").delete(admin::clients::delete)),
        )
        .push(portfolio(Router::new().hoop(tenant::operator)))
        .push(portfolio(
            Router::with_path("{slug}")
                .hoop(guards::tenant)
                .hoop(tenant::handler),
        ))
        .push(Router::with_path("{**rest}").goal(pages::not_found))
}

/// Home, contact and project pages beneath `base`.
fn portfolio(base: Router) -> Router {
    base.get(pages::public::home)
        .push(Router::with_path("contact").get(pages::public::contact))
        .push(
            Router::with_path("projects")
                .get(pages::public::projects)
                .push(Router::with_path("{id}").get(pages::public::project)),
        )
}
