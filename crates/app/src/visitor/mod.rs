//! Per-visitor state: the durable string namespace plus the brand and access
//! stores layered over it.

pub mod access;
pub mod brand;
pub mod storage;

pub use access::AccessTokenStore;
pub use brand::{BrandDefaults, BrandPatch, BrandState, BrandStore, LogoSource};
pub use storage::{MemoryStorage, Storage, StorageChange, keys};

/// Brand and access stores sharing one storage namespace.
#[derive(Debug)]
pub struct VisitorContext<S> {
    pub brand: BrandStore<S>,
    pub access: AccessTokenStore<S>,
}

impl<S: Storage + Clone> VisitorContext<S> {
    /// Load both stores from `storage`, falling back to `defaults` for brand fields.
    pub fn load(storage: S, defaults: &BrandDefaults) -> Self {
        Self {
            access: AccessTokenStore::new(storage.clone()),
            brand: BrandStore::load(storage, defaults),
        }
    }
}
