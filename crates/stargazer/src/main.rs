use anyhow::{Context, Result};
use clap::Parser;
use stargazer_client::HttpApiClient;
use stargazer_config::{AppConfig, FileStorage};
use stargazer_state::AppContext;
use std::sync::Arc;

mod commands;
mod logger;

use commands::Command;

#[derive(Parser, Debug)]
#[command(name = "stargazer", version, about = "Stargazer session client")]
struct Cli {
    /// API base URL (overrides config and STARGAZER_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = logger::init()?;
    log::info!("Starting stargazer ({})", cli.command.name());
    log::debug!("Logging to {:?}", log_file);

    match dotenvy::dotenv() {
        Ok(path) => log::debug!("Loaded .env file from: {:?}", path),
        Err(_) => log::debug!(".env file not found, using process environment"),
    }

    let mut config = AppConfig::load();
    if let Some(api_url) = cli.api_url {
        config.api_base_url = api_url;
    }

    let storage_path = config.storage_path()?;
    let storage = Arc::new(FileStorage::open(storage_path));

    let client = HttpApiClient::with_timeout(&config.api_base_url, config.request_timeout())
        .context("Failed to create API client")?;
    let ctx = AppContext::new(client, storage, &config)?;

    cli.command.run(&ctx).await;

    log::info!("Exiting stargazer");
    Ok(())
}
