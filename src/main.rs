//! Entry point for uniapi, a command-line client for unified LLM endpoints.
//!
//! This binary loads environment variables, sets up logging, parses CLI
//! arguments via [`cli`], and dispatches to the appropriate subcommand handler.

mod cli;
mod config;
mod constants;
mod error;
mod message;
mod models;
mod output;
mod provider;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Runs the uniapi CLI.
///
/// Loads `.env` files (silently ignored if absent), installs a stderr log
/// subscriber filtered by `RUST_LOG`, parses command-line arguments into a
/// [`cli::Cli`] struct, and dispatches the chosen subcommand via [`cli::run`].
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(constants::DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = cli::parse();
    cli::run(cli).await
}
