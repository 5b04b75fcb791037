//! Clients Data

use crate::{translations::Language, visitor::brand::DEFAULT_LOGO_SCALE};

/// Create-or-update payload, keyed by slug.
///
/// A blank `slug` is derived from `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientUpsert {
    pub slug: String,
    pub name: String,
    pub email: String,
    pub logo: String,
    pub logo_scale: i32,
    pub invert_logo: bool,
    pub language: Language,
}

impl ClientUpsert {
    /// Payload with defaults for everything but the identity fields.
    #[must_use]
    pub fn named(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            email: String::new(),
            logo: String::new(),
            logo_scale: DEFAULT_LOGO_SCALE,
            invert_logo: false,
            language: Language::default(),
        }
    }
}
