//! Flat string key/value storage backing visitor state.

use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

/// Keys used in the visitor namespace.
pub mod keys {
    pub const BRAND_NAME: &str = "brandName";
    pub const BRAND_LOGO: &str = "brandLogo";
    pub const BRAND_EMAIL: &str = "brandEmail";
    pub const BRAND_INVERT_LOGO: &str = "brandInvertLogo";
    pub const BRAND_LANG: &str = "brandLang";
    pub const BRAND_LOGO_SCALE: &str = "brandLogoScale";
    pub const CLIENT_TOKEN: &str = "client_token";
    pub const CLIENT_SLUG: &str = "client_slug";

    /// Every key the visitor namespace may contain.
    pub const ALL: [&str; 8] = [
        BRAND_NAME,
        BRAND_LOGO,
        BRAND_EMAIL,
        BRAND_INVERT_LOGO,
        BRAND_LANG,
        BRAND_LOGO_SCALE,
        CLIENT_TOKEN,
        CLIENT_SLUG,
    ];
}

/// A flat namespace of string values.
///
/// Implementations use interior mutability so several stores can share one
/// namespace through cheap clones.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);

    fn remove(&self, key: &str);
}

/// A write made since the storage was seeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageChange {
    Set { key: String, value: String },
    Removed { key: String },
}

#[derive(Debug, Default)]
struct MemoryState {
    values: FxHashMap<String, String>,
    changes: FxHashMap<String, Option<String>>,
}

/// In-memory storage that remembers which keys changed.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<MemoryState>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build storage holding `entries` without recording them as changes.
    pub fn seeded<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();

        Self {
            inner: Arc::new(Mutex::new(MemoryState {
                values,
                changes: FxHashMap::default(),
            })),
        }
    }

    /// Drain the writes recorded since seeding (or the last drain), ordered by key.
    #[must_use]
    pub fn take_changes(&self) -> Vec<StorageChange> {
        let mut changes: Vec<_> = self.inner.lock().changes.drain().collect();

        changes.sort_by(|(a, _), (b, _)| a.cmp(b));

        changes
            .into_iter()
            .map(|(key, value)| match value {
                Some(value) => StorageChange::Set { key, value },
                None => StorageChange::Removed { key },
            })
            .collect()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.lock().values.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut state = self.inner.lock();

        if state.values.get(key).map(String::as_str) == Some(value) {
            return;
        }

        state.values.insert(key.to_string(), value.to_string());
        state.changes.insert(key.to_string(), Some(value.to_string()));
    }

    fn remove(&self, key: &str) {
        let mut state = self.inner.lock();

        if state.values.remove(key).is_some() {
            state.changes.insert(key.to_string(), None);
        }
    }
}
