use clap::Args;
use vitrina_app::domain::clients::ClientsService;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ListClientsArgs {
    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: ListClientsArgs) -> Result<(), String> {
    let service = args.database.clients_service().await?;

    let clients = service
        .list_clients()
        .await
        .map_err(|error| format!("failed to list clients: {error}"))?;

    if clients.is_empty() {
        println!("no clients found");
        return Ok(());
    }

    for client in clients {
        println!("slug: {}", client.slug);
        println!("name: {}", client.name);
        println!("client_id: {}", client.uuid);
        println!("language: {}", client.language);
        println!("created_at: {}", client.created_at);
        println!();
    }

    Ok(())
}
