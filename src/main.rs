use bookstore_manager::cli::{Cli, Command};
use bookstore_manager::config::ConfigLoader;
use bookstore_manager::server::Server;
use bookstore_manager::{db, logger};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = ConfigLoader::new()?.load()?;
    logger::init(&settings.logger)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => Server::new(settings).run().await,
        Command::Migrate => db::run_migrations(&settings.database.url).await,
    }
}
