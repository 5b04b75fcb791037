use clap::{Args, Parser, Subcommand};
use vitrina_app::{database, domain::clients::PgClientsService};

mod admin;
mod client;

#[derive(Debug, Parser)]
#[command(name = "vitrina-app", about = "Vitrina CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Admin(admin::AdminCommand),
    Client(client::ClientCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Admin(command) => admin::run(command).await,
            Commands::Client(command) => client::run(command).await,
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

impl DatabaseArgs {
    pub(crate) async fn clients_service(&self) -> Result<PgClientsService, String> {
        let pool = database::connect(&self.database_url)
            .await
            .map_err(|error| format!("failed to connect to database: {error}"))?;

        Ok(PgClientsService::new(database::Db::new(pool)))
    }
}
