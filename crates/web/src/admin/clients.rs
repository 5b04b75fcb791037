//! Delete Client Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{admin::errors::clients_status_error, extensions::*, state::State};

/// Delete Client Handler
#[endpoint(
    tags("clients"),
    summary = "Delete Client",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Client deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Client not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn delete(
    slug: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .clients
        .delete_client(slug.into_inner())
        .await
        .map_err(clients_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
