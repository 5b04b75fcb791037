//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    assets::{AssetStorage, ObjectStorageClient, ObjectStorageConfig},
    database::{self, Db},
    domain::clients::{ClientsService, PgClientsService},
    identity::{GoTrueClient, GoTrueConfig, IdentityProvider},
    resolver::TenantResolver,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] sqlx::migrate::MigrateError),
}

/// Hosted backend endpoints shared by the identity and storage clients.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub url: String,
    pub api_key: String,
    pub asset_bucket: String,
}

#[derive(Clone)]
pub struct AppContext {
    pub clients: Arc<dyn ClientsService>,
    pub identity: Arc<dyn IdentityProvider>,
    pub assets: Arc<dyn AssetStorage>,
    pub resolver: TenantResolver,
}

impl AppContext {
    /// Assemble a context from already-built services.
    #[must_use]
    pub fn new(
        clients: Arc<dyn ClientsService>,
        identity: Arc<dyn IdentityProvider>,
        assets: Arc<dyn AssetStorage>,
    ) -> Self {
        Self {
            resolver: TenantResolver::new(Arc::clone(&clients)),
            clients,
            identity,
            assets,
        }
    }

    /// Build application context from a database URL and backend settings.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting to or migrating the database fails.
    pub async fn from_database_url(
        url: &str,
        backend: BackendConfig,
        run_migrations: bool,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        if run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrations)?;
        }

        let identity = GoTrueClient::new(GoTrueConfig {
            url: backend.url.clone(),
            api_key: backend.api_key.clone(),
        });

        let assets = ObjectStorageClient::new(ObjectStorageConfig {
            url: backend.url,
            api_key: backend.api_key,
            bucket: backend.asset_bucket,
        });

        Ok(Self::new(
            Arc::new(PgClientsService::new(Db::new(pool))),
            Arc::new(identity),
            Arc::new(assets),
        ))
    }
}
