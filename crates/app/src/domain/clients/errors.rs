//! Clients service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientsServiceError {
    #[error("client already exists")]
    AlreadyExists,

    #[error("client not found")]
    NotFound,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("invalid slug {0:?}")]
    InvalidSlug(String),

    #[error("slug {0:?} is reserved")]
    ReservedSlug(String),

    #[error("logo scale {0} is outside 30..=200")]
    LogoScaleOutOfRange(i32),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ClientsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
