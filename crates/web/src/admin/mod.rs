//! Admin surface: sign-in, the link generator and client management.

pub(crate) mod clients;
pub(crate) mod errors;
pub(crate) mod generator;
pub(crate) mod login;
pub(crate) mod logo;
pub(crate) mod logout;
pub(crate) mod preview;
pub(crate) mod views;

/// Landing page after sign-in.
pub(crate) const ADMIN_ROUTE: &str = "/admin";
