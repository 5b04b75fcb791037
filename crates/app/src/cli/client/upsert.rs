use clap::Args;
use vitrina_app::{
    domain::clients::{ClientsService, data::ClientUpsert},
    translations::Language,
};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct UpsertClientArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Client display name
    #[arg(long)]
    name: String,

    /// URL slug; derived from the name when omitted
    #[arg(long, default_value = "")]
    slug: String,

    /// Contact email shown on the client's pages
    #[arg(long, default_value = "")]
    email: String,

    /// Logo URL or inline SVG
    #[arg(long, default_value = "")]
    logo: String,

    /// Logo scale percentage (30-200)
    #[arg(long, default_value_t = 100)]
    logo_scale: i32,

    /// Invert the logo colours for dark backgrounds
    #[arg(long)]
    invert_logo: bool,

    /// Display language (en, es)
    #[arg(long, default_value = "es")]
    language: String,

    /// Public site URL used to print the share link
    #[arg(long, env = "PUBLIC_BASE_URL", default_value = "http://localhost:8698")]
    public_base_url: String,
}

pub(crate) async fn run(args: UpsertClientArgs) -> Result<(), String> {
    let language = Language::parse(&args.language)
        .ok_or_else(|| format!("unsupported language {:?}", args.language))?;

    let service = args.database.clients_service().await?;

    let client = service
        .upsert_client(ClientUpsert {
            slug: args.slug,
            name: args.name,
            email: args.email,
            logo: args.logo,
            logo_scale: args.logo_scale,
            invert_logo: args.invert_logo,
            language,
        })
        .await
        .map_err(|error| format!("failed to save client: {error}"))?;

    println!("client_id: {}", client.uuid);
    println!("client_slug: {}", client.slug);
    println!(
        "share_link: {}/{}?token={}",
        args.public_base_url.trim_end_matches('/'),
        client.slug,
        client.uuid
    );

    Ok(())
}
