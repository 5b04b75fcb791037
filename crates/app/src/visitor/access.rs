//! Access token store.

use crate::visitor::storage::{Storage, keys};

/// The client token and slug a visitor was last admitted with.
#[derive(Debug, Clone)]
pub struct AccessTokenStore<S> {
    storage: S,
}

impl<S: Storage> AccessTokenStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Stored token, if non-empty.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.storage
            .get(keys::CLIENT_TOKEN)
            .filter(|token| !token.is_empty())
    }

    /// Stored slug, if non-empty.
    #[must_use]
    pub fn slug(&self) -> Option<String> {
        self.storage
            .get(keys::CLIENT_SLUG)
            .filter(|slug| !slug.is_empty())
    }

    /// Persist a token together with the slug it unlocks.
    pub fn store(&self, token: &str, slug: &str) {
        self.storage.set(keys::CLIENT_TOKEN, token);
        self.storage.set(keys::CLIENT_SLUG, slug);
    }

    pub fn clear(&self) {
        self.storage.remove(keys::CLIENT_TOKEN);
        self.storage.remove(keys::CLIENT_SLUG);
    }
}
