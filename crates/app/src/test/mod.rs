//! Test support: containerised databases and shared fixtures.

mod db;

pub(crate) use context::TestContext;
