//! Identity errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentityError {
    /// Transport or decoding failure talking to the identity service.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service refused the request; carries its human-readable message.
    #[error("{0}")]
    Rejected(String),

    /// The service answered with something unexpected.
    #[error("unexpected response from identity service: {0}")]
    UnexpectedResponse(String),
}
