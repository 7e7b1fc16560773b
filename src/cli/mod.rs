//! Command-line interface definition and dispatch for uniapi.
//!
//! Uses [`clap`] for argument parsing with derive macros. Each subcommand is
//! routed to its handler; model listing and selection live in the
//! [`models`] submodule.

mod models;

use crate::{config, message::ChatRequest, output, provider};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::debug;

use crate::models::grouping::GroupBy;

/// Top-level CLI structure for uniapi.
#[derive(Parser)]
#[command(name = "uniapi", about = "One endpoint, many models")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for the uniapi CLI.
///
/// The `///` doc comments on variants double as `--help` text rendered by clap.
#[derive(Subcommand)]
pub enum Commands {
    /// Send one chat message through the unified endpoint
    Chat {
        /// The message to send
        prompt: Vec<String>,
        /// Model (or Azure deployment) to use (overrides config)
        #[arg(short, long)]
        model: Option<String>,
        /// System prompt
        #[arg(short, long)]
        system: Option<String>,
        /// Sampling temperature
        #[arg(short, long)]
        temperature: Option<f64>,
    },
    /// List available models
    Models {
        /// How to group the listing
        #[arg(short, long, value_enum, default_value_t = GroupBy::Provider)]
        group_by: GroupBy,
        /// Ignore the enabled-model selection
        #[arg(short, long)]
        all: bool,
        /// Skip the remote catalog and use the built-in model list
        #[arg(long)]
        offline: bool,
    },
    /// Choose which models appear in listings
    Enable {
        #[command(subcommand)]
        action: EnableAction,
        /// Skip the remote catalog and use the built-in model list
        #[arg(long, global = true)]
        offline: bool,
    },
    /// Show token usage reported for the unified endpoint
    Usage,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Subcommands for the `enable` command.
#[derive(Subcommand)]
pub enum EnableAction {
    /// Show the current selection
    Status,
    /// Enable every available model
    All,
    /// Disable every model
    None,
    /// Swap enabled and disabled models
    Invert,
    /// Enable one model by key (name@provider)
    On { key: String },
    /// Disable one model by key (name@provider)
    Off { key: String },
}

/// Subcommands for the `config` command.
///
/// Controls reading and writing uniapi's TOML configuration file
/// stored at the XDG config path (`~/.config/uniapi/config.toml`).
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current config
    Show,
    /// Print the config file path
    Path,
    /// Set a config value (e.g. `unified.base_url api.example.com`)
    Set { key: String, value: String },
}

/// Parses command-line arguments into a [`Cli`] struct.
///
/// Delegates to [`clap::Parser::parse`], which exits the process on invalid input.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Dispatches the parsed CLI command to its handler.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Chat {
            prompt,
            model,
            system,
            temperature,
        } => {
            let prompt = prompt.join(" ");
            if prompt.is_empty() {
                anyhow::bail!("No prompt provided. Usage: uniapi chat \"your message here\"");
            }

            let config = config::Config::load()?;
            let model = resolve_chat_model(model.as_deref(), &config);

            println!(
                "{} [{} · model: {}]",
                "uniapi".bold().cyan(),
                config.unified.format,
                model.yellow(),
            );
            println!();

            let mut request = ChatRequest::new(model, prompt).with_system(system);
            if let Some(t) = temperature {
                request = request.with_temperature(t);
            }

            let api = provider::UnifiedApi::new();
            match api.chat(&config.unified_resolved(), &request).await {
                Ok(reply) => {
                    debug!(body = %reply.raw, "Upstream reply");
                    output::print_reply(&reply.content);
                    Ok(())
                }
                Err(err) => {
                    output::print_error(&err.to_string());
                    Err(err)
                }
            }
        }
        Commands::Models {
            group_by,
            all,
            offline,
        } => {
            let config = config::Config::load()?;
            models::list_models(&config, group_by, all, offline).await
        }
        Commands::Enable { action, offline } => {
            let config = config::Config::load()?;
            models::handle_enable(config, action, offline).await
        }
        Commands::Usage => {
            let config = config::Config::load()?;
            let usage = provider::UnifiedApi::new().usage(&config.unified)?;
            println!(
                "{} {} / {} tokens",
                "Usage:".bold(),
                usage.used,
                usage.total
            );
            Ok(())
        }
        Commands::Config { action } => {
            match action {
                ConfigAction::Show => {
                    let config = config::Config::load()?;
                    let path = config::Config::config_path()?;
                    println!("{} {}", "Config path:".bold(), path.display());
                    println!();
                    let toml_str = toml::to_string_pretty(&config)?;
                    println!("{}", toml_str);
                }
                ConfigAction::Path => {
                    println!("{}", config::Config::config_path()?.display());
                }
                ConfigAction::Set { key, value } => {
                    // Edit the global file as written, without project overrides
                    // or substituted placeholders leaking into it.
                    let path = config::Config::config_path()?;
                    let mut config = if path.exists() {
                        config::Config::load_from(&path)?
                    } else {
                        config::Config::default()
                    };
                    config.set(&key, &value)?;
                    config
                        .save()
                        .with_context(|| format!("Failed to save {key}"))?;
                    println!("{} {} = {}", "Set".green(), key.bold(), value);
                }
            }
            Ok(())
        }
    }
}

/// Model for `chat`: flag, then configured default (provider suffix
/// dropped), then the built-in fallback.
fn resolve_chat_model(cli_model: Option<&str>, config: &config::Config) -> String {
    cli_model
        .map(String::from)
        .or_else(|| {
            config
                .models
                .default_model
                .as_deref()
                .map(|m| crate::models::split_model_key(m).0.to_string())
        })
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| crate::constants::FALLBACK_CHAT_MODEL.to_string())
}
