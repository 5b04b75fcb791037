use clap::{Args, Subcommand};

mod delete;
mod list;
mod upsert;

#[derive(Debug, Args)]
pub(crate) struct ClientCommand {
    #[command(subcommand)]
    command: ClientSubcommand,
}

#[derive(Debug, Subcommand)]
enum ClientSubcommand {
    /// Create a client link, or update the one holding the slug.
    Upsert(upsert::UpsertClientArgs),
    /// List client links, newest first.
    List(list::ListClientsArgs),
    /// Delete a client link.
    Delete(delete::DeleteClientArgs),
}

pub(crate) async fn run(command: ClientCommand) -> Result<(), String> {
    match command.command {
        ClientSubcommand::Upsert(args) => upsert::run(args).await,
        ClientSubcommand::List(args) => list::run(args).await,
        ClientSubcommand::Delete(args) => delete::run(args).await,
    }
}
