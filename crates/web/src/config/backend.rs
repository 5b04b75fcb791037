//! Backend Config

use clap::Args;
use vitrina_app::context::BackendConfig;

/// Hosted backend settings.
#[derive(Debug, Args)]
pub struct BackendSettings {
    /// Backend base URL
    #[arg(long, env = "BACKEND_URL")]
    pub backend_url: String,

    /// Backend API key
    #[arg(long, env = "BACKEND_API_KEY", hide_env_values = true)]
    pub backend_api_key: String,

    /// Public bucket receiving uploaded logos
    #[arg(long, env = "ASSET_BUCKET", default_value = "public_assets")]
    pub asset_bucket: String,
}

impl From<BackendSettings> for BackendConfig {
    fn from(settings: BackendSettings) -> Self {
        Self {
            url: settings.backend_url,
            api_key: settings.backend_api_key,
            asset_bucket: settings.asset_bucket,
        }
    }
}
