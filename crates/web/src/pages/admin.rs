//! Admin pages: the client dashboard and the link generator.

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    admin::{errors::clients_status_error, views::ClientView},
    extensions::*,
    pages::{PageContent, PageResponse, render},
    state::State,
};

/// Dashboard listing every client with its share link, newest first.
#[handler]
pub(crate) async fn dashboard(depot: &mut Depot) -> Result<Json<PageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let clients = state
        .app
        .clients
        .list_clients()
        .await
        .map_err(clients_status_error)?
        .iter()
        .map(|client| ClientView::new(client, &state.site))
        .collect();

    render(depot, PageContent::Admin { clients })
}

/// Generator form; `?edit={slug}` pre-fills it with an existing client.
#[handler]
pub(crate) async fn generator(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<PageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let edit = match req.query::<String>("edit").filter(|slug| !slug.trim().is_empty()) {
        Some(slug) => {
            let client = state
                .app
                .clients
                .get_client(slug)
                .await
                .map_err(clients_status_error)?;

            Some(ClientView::new(&client, &state.site))
        }
        None => None,
    };

    render(depot, PageContent::Generator { edit })
}
