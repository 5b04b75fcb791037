//! Shared domain, persistence and visitor-state modules for the studio site.

pub mod assets;
pub mod context;
pub mod database;
pub mod domain;
pub mod guards;
pub mod identity;
pub mod projects;
pub mod resolver;
pub mod translations;
pub mod visitor;

#[cfg(test)]
mod test;

mod uuids;

pub use uuids::TypedUuid;
