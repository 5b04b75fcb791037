//! Admin Errors

use salvo::http::StatusError;
use tracing::error;

use vitrina_app::{
    assets::AssetStorageError, domain::clients::ClientsServiceError, identity::IdentityError,
};

pub(crate) fn clients_status_error(error: ClientsServiceError) -> StatusError {
    match error {
        ClientsServiceError::AlreadyExists => {
            StatusError::conflict().brief("A client with this slug already exists")
        }
        ClientsServiceError::NotFound => StatusError::not_found().brief("Client not found"),
        ClientsServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("Client name is required")
        }
        ClientsServiceError::InvalidSlug(slug) => {
            StatusError::bad_request().brief(format!("Invalid slug {slug:?}"))
        }
        ClientsServiceError::ReservedSlug(slug) => {
            StatusError::bad_request().brief(format!("The slug {slug:?} is reserved"))
        }
        ClientsServiceError::LogoScaleOutOfRange(scale) => StatusError::bad_request()
            .brief(format!("Logo scale {scale} must be between 30 and 200")),
        ClientsServiceError::InvalidReference | ClientsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid client payload")
        }
        ClientsServiceError::Sql(source) => {
            error!("client storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn identity_status_error(error: IdentityError) -> StatusError {
    match error {
        IdentityError::Rejected(message) => StatusError::unauthorized().brief(message),
        IdentityError::Http(source) => {
            error!("identity service unreachable: {source}");

            StatusError::bad_gateway().brief("Authentication service unavailable")
        }
        IdentityError::UnexpectedResponse(message) => {
            error!("identity service failed: {message}");

            StatusError::bad_gateway().brief("Authentication service unavailable")
        }
    }
}

pub(crate) fn assets_status_error(error: AssetStorageError) -> StatusError {
    match error {
        AssetStorageError::UnsupportedFile(name) => {
            StatusError::bad_request().brief(format!("Unsupported logo file {name:?}"))
        }
        AssetStorageError::EmptyFile => StatusError::bad_request().brief("Logo file is empty"),
        AssetStorageError::Http(source) => {
            error!("object storage unreachable: {source}");

            StatusError::bad_gateway().brief("Logo upload failed")
        }
        AssetStorageError::UnexpectedResponse(message) => {
            error!("object storage failed: {message}");

            StatusError::bad_gateway().brief("Logo upload failed")
        }
    }
}
