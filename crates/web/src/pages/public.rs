//! Portfolio and access pages.

use salvo::prelude::*;

use vitrina_app::projects::{self as catalog, OFFICE_ADDRESS};

use crate::{
    extensions::*,
    pages::{PageContent, PageResponse, render},
};

#[handler]
pub(crate) async fn home(depot: &mut Depot) -> Result<Json<PageResponse>, StatusError> {
    render(depot, PageContent::Home {
        projects: catalog::all(),
    })
}

#[handler]
pub(crate) async fn projects(depot: &mut Depot) -> Result<Json<PageResponse>, StatusError> {
    render(depot, PageContent::Projects {
        projects: catalog::all(),
    })
}

/// A single project; unknown ids render the not-found page.
#[handler]
pub(crate) async fn project(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let id = req.param::<String>("id").unwrap_or_default();

    let page = match catalog::find(&id) {
        Some(found) => render(depot, PageContent::Project { project: found }),
        None => {
            res.status_code(StatusCode::NOT_FOUND);

            render(depot, PageContent::NotFound)
        }
    };

    match page {
        Ok(page) => res.render(page),
        Err(error) => res.render(error),
    }
}

/// Contact page; the email follows the brand.
#[handler]
pub(crate) async fn contact(depot: &mut Depot) -> Result<Json<PageResponse>, StatusError> {
    let email = depot.visitor_or_500()?.brand.get().email.clone();

    render(depot, PageContent::Contact {
        address: OFFICE_ADDRESS,
        email,
    })
}

#[handler]
pub(crate) async fn unauthorized(depot: &mut Depot) -> Result<Json<PageResponse>, StatusError> {
    render(depot, PageContent::Unauthorized)
}

/// Login form; a signed-in admin goes straight to the dashboard.
#[handler]
pub(crate) async fn login(depot: &mut Depot, res: &mut Response) {
    if depot.is_admin() {
        res.render(Redirect::found(crate::admin::ADMIN_ROUTE));

        return;
    }

    match render(depot, PageContent::Login) {
        Ok(page) => res.render(page),
        Err(error) => res.render(error),
    }
}
