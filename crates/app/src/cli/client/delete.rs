use clap::Args;
use vitrina_app::domain::clients::ClientsService;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct DeleteClientArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Slug of the client to delete
    #[arg(long)]
    slug: String,
}

pub(crate) async fn run(args: DeleteClientArgs) -> Result<(), String> {
    let service = args.database.clients_service().await?;

    service
        .delete_client(args.slug.clone())
        .await
        .map_err(|error| format!("failed to delete client {}: {error}", args.slug))?;

    println!("deleted client {}", args.slug);

    Ok(())
}
