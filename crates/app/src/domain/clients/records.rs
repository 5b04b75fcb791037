//! Client Records

use jiff::Timestamp;

use crate::{translations::Language, uuids::TypedUuid};

/// Client UUID; doubles as the client's access token.
pub type ClientUuid = TypedUuid<ClientRecord>;

/// Client Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRecord {
    pub uuid: ClientUuid,
    pub slug: String,
    pub name: String,
    pub email: String,
    pub logo: String,
    pub logo_scale: i32,
    pub invert_logo: bool,
    pub language: Language,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
