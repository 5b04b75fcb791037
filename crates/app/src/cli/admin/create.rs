use clap::Args;
use vitrina_app::identity::{Credentials, GoTrueClient, GoTrueConfig, IdentityProvider};

#[derive(Debug, Args)]
pub(crate) struct CreateAdminArgs {
    /// Admin email address
    #[arg(long, env = "ADMIN_EMAIL")]
    email: String,

    /// Admin password
    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    password: String,

    /// Backend base URL
    #[arg(long, env = "BACKEND_URL")]
    backend_url: String,

    /// Backend API key
    #[arg(long, env = "BACKEND_API_KEY", hide_env_values = true)]
    backend_api_key: String,
}

pub(crate) async fn run(args: CreateAdminArgs) -> Result<(), String> {
    if args.password.len() < 6 {
        return Err("password must be at least 6 characters".to_string());
    }

    let identity = GoTrueClient::new(GoTrueConfig {
        url: args.backend_url,
        api_key: args.backend_api_key,
    });

    let user = identity
        .sign_up(Credentials {
            email: args.email,
            password: args.password,
        })
        .await
        .map_err(|error| format!("failed to create admin: {error}"))?;

    println!("admin_id: {}", user.id);
    println!("admin_email: {}", user.email.unwrap_or_default());

    Ok(())
}
