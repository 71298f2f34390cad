//! jobclip background service
//!
//! Runs the coordinator as a local HTTP service, or prints the target
//! Notion database's schema.

use anyhow::{Context, Result};
use background::notion::{NotionClient, NotionOptions};
use background::{Config, Coordinator, api};
use clap::{Parser, Subcommand};
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "background", about = "jobclip background coordinator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the coordinator API (default)
    Serve,
    /// Print the Notion database schema
    Schema,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,background=debug".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;
    let notion = NotionClient::new(NotionOptions::from(&config));

    match cli.command.unwrap_or(Command::Serve) {
        Command::Schema => {
            let schema = notion
                .retrieve_database()
                .await
                .context("Failed to retrieve database schema")?;
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
        Command::Serve => {
            let state = Arc::new(Coordinator::new(notion));
            let app = api::router(state);

            let listener = tokio::net::TcpListener::bind(config.bind_addr)
                .await
                .context("Failed to bind to address")?;
            tracing::info!(addr = %config.bind_addr, "Background coordinator listening");

            axum::serve(listener, app).await.context("Server error")?;
        }
    }

    Ok(())
}
