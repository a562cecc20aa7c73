//! # Vitesse CLI
//!
//! Terminal client for the Vitesse recruitment API.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod state;
mod telemetry;

use cli::Cli;
use config::AppConfig;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?.with_overrides(&cli)?;

    telemetry::init_telemetry(&config.telemetry);

    tracing::debug!(base_url = %config.api.base_url, "Using Vitesse API");

    let state = AppState::new(&config.api)?;

    let mut stdout = std::io::stdout().lock();
    commands::execute(cli.command, &state, &config.credentials, &mut stdout).await
}
