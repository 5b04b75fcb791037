//! Guard middleware.

use salvo::{http::header::RETRY_AFTER, prelude::*};
use tracing::debug;

use vitrina_app::guards::{AdminGuard, Guard, GuardContext, GuardDecision, TenantGuard, evaluate};

use crate::extensions::*;

/// Admin-only routes: `/generator`, `/admin`.
#[salvo::handler]
pub(crate) async fn admin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    guard(&[&AdminGuard], req, depot, res, ctrl).await;
}

/// Tenant routes: admins, or anyone holding a client token.
#[salvo::handler]
pub(crate) async fn tenant(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    guard(&[&TenantGuard], req, depot, res, ctrl).await;
}

async fn guard(
    guards: &[&dyn Guard],
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let decision = {
        let session = depot.session_state();
        let client_token = depot
            .visitor_or_500()
            .ok()
            .and_then(|visitor| visitor.access.token());
        let url_token = req.query::<String>("token");

        let ctx = GuardContext::from_session(&session)
            .with_tokens(client_token.as_deref(), url_token.as_deref());

        evaluate(guards, &ctx)
    };

    match decision {
        GuardDecision::Admit => {
            ctrl.call_next(req, depot, res).await;
        }
        GuardDecision::Pending => {
            res.status_code(StatusCode::NO_CONTENT);

            if let Err(error) = res.add_header(RETRY_AFTER, "1", true) {
                debug!("could not set retry-after header: {error}");
            }

            ctrl.skip_rest();
        }
        GuardDecision::Redirect(target) => {
            debug!(path = req.uri().path(), target, "guard redirect");

            res.render(Redirect::found(target));

            ctrl.skip_rest();
        }
    }
}
