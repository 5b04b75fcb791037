//! Server configuration module

use clap::Parser;

use crate::config::{
    backend::BackendSettings, brand::BrandConfig, db::DatabaseConfig,
    observability::LoggingConfig, server::ServerRuntimeConfig,
};

pub(crate) mod backend;
pub(crate) mod brand;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

/// Vitrina web server configuration
#[derive(Debug, Parser)]
#[command(name = "vitrina-web", about = "Vitrina studio site server", long_about = None)]
pub struct ServerConfig {
    /// Server network and cookie settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Hosted backend (identity and object storage) settings.
    #[command(flatten)]
    pub backend: BackendSettings,

    /// Operator brand used when a visitor has none stored.
    #[command(flatten)]
    pub brand: BrandConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
