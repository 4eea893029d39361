use clap::{Parser, Subcommand};
use std::sync::Arc;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

mod api;
mod cli;
mod config;
mod context;
mod error;
mod handlers;
mod intent;
mod routes;
mod server;
#[cfg(test)]
mod test_utils;
mod vendor;

use config::Config;
use context::create_context;
use vendor::shapes::ShapesClient;

/// Web and terminal front end for a hosted shape chat model.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Default, Subcommand)]
enum Mode {
    /// Run the HTTP server (default)
    #[default]
    Serve,
    /// Chat from the terminal
    Cli,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;
    let chat = Arc::new(ShapesClient::new(&config)?);
    let ctx = create_context(config, chat);

    match args.mode.unwrap_or_default() {
        Mode::Serve => server::serve(ctx).await,
        Mode::Cli => {
            let input = BufReader::new(tokio::io::stdin());
            cli::run(&ctx, input, tokio::io::stdout()).await
        }
    }
}
