//! Operator Brand Config

use clap::Args;
use vitrina_app::{translations::Language, visitor::BrandDefaults};

/// Operator brand defaults.
#[derive(Debug, Args)]
pub struct BrandConfig {
    /// Studio name
    #[arg(long, env = "CLIENT_NAME")]
    pub client_name: Option<String>,

    /// Studio logo URL or inline SVG
    #[arg(long, env = "CLIENT_LOGO")]
    pub client_logo: Option<String>,

    /// Studio contact email
    #[arg(long, env = "CLIENT_EMAIL")]
    pub client_email: Option<String>,

    /// Invert the studio logo colours
    #[arg(long, env = "CLIENT_INVERT_LOGO", default_value_t = false)]
    pub client_invert_logo: bool,

    /// Default display language (en, es)
    #[arg(long, env = "CLIENT_LANGUAGE")]
    pub client_language: Option<String>,

    /// Studio logo scale percentage
    #[arg(long, env = "CLIENT_LOGO_SCALE")]
    pub client_logo_scale: Option<i32>,
}

impl From<BrandConfig> for BrandDefaults {
    fn from(config: BrandConfig) -> Self {
        Self {
            name: config.client_name,
            logo_url: config.client_logo,
            email: config.client_email,
            invert_logo: config.client_invert_logo,
            language: config.client_language.as_deref().and_then(Language::parse),
            logo_scale: config.client_logo_scale,
        }
    }
}
