//! Domain Concerns

pub mod clients;
