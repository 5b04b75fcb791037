//! Tenant resolution middleware.

use std::sync::Arc;

use salvo::prelude::*;
use tracing::debug;

use vitrina_app::{
    guards::UNAUTHORIZED_ROUTE,
    resolver::{Resolution, ResolveRequest},
};

use crate::{extensions::*, state::State};

/// The tenant a branded page is rendered for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TenantPage {
    pub(crate) slug: String,
    pub(crate) title: String,
}

impl TenantPage {
    /// Prefix for links inside the tenant's pages.
    #[must_use]
    pub(crate) fn base_path(&self) -> String {
        format!("/{}", self.slug)
    }
}

/// `/{slug}/...` routes: resolve the slug and token into the visitor's brand.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let slug = req.param::<String>("slug").unwrap_or_default();
    let query_token = req.query::<String>("token");

    let request = ResolveRequest {
        slug: Some(&slug),
        query_token: query_token.as_deref(),
        admin: depot.is_admin(),
    };

    let resolution = match resolve(request, depot).await {
        Ok(resolution) => resolution,
        Err(error) => {
            res.render(error);

            return;
        }
    };

    if let Resolution::Resolved { title, strip_token: false } = resolution {
        depot.inject(TenantPage { slug, title });

        ctrl.call_next(req, depot, res).await;

        return;
    }

    respond(req, res, ctrl, resolution);
}

/// Operator pages: a visitor who already holds a tenant is sent back to it.
#[salvo::handler]
pub(crate) async fn operator(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let resolution = match resolve(ResolveRequest::default(), depot).await {
        Ok(resolution) => resolution,
        Err(error) => {
            res.render(error);

            return;
        }
    };

    if resolution == Resolution::NoTenant {
        ctrl.call_next(req, depot, res).await;

        return;
    }

    respond(req, res, ctrl, resolution);
}

async fn resolve(request: ResolveRequest<'_>, depot: &mut Depot) -> Result<Resolution, StatusError> {
    let state = Arc::clone(depot.obtain_or_500::<Arc<State>>()?);
    let visitor = depot.visitor_mut_or_500()?;

    Ok(state.app.resolver.resolve(request, visitor).await)
}

fn respond(req: &Request, res: &mut Response, ctrl: &mut FlowCtrl, resolution: Resolution) {
    let path = req.uri().path();

    let target = match resolution {
        // Same page, minus the token in the address bar
        Resolution::Resolved { .. } => without_token(path, req.uri().query()),
        Resolution::RedirectToStored { slug } => {
            format!("/{slug}{}", path.trim_end_matches('/'))
        }
        Resolution::Unauthorized => UNAUTHORIZED_ROUTE.to_string(),
        Resolution::NoTenant => return,
    };

    debug!(path, target = %target, "tenant redirect");

    res.render(Redirect::found(target));

    ctrl.skip_rest();
}

/// `path` with the query rebuilt from every pair except `token`.
fn without_token(path: &str, query: Option<&str>) -> String {
    let kept = query
        .unwrap_or_default()
        .split('&')
        .filter(|pair| {
            let key = pair.split_once('=').map_or(*pair, |(key, _value)| key);

            !key.is_empty() && key != "token"
        })
        .collect::<Vec<_>>();

    if kept.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{}", kept.join("&"))
    }
}
