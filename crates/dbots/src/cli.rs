//! Command line interface
//!
//! | Command | Description |
//! |---------|-------------|
//! | `dbots services` | List the built-in and configured services |
//! | `dbots post <service>` | Post the configured stats to one service |
//! | `dbots post-all` | Post to every service with an API key |
//! | `dbots bot <service> <id>` | Fetch a bot's listing entry |

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dbots_application::{ServiceClient, ServiceDescriptor};
use dbots_domain::ServiceResponse;
use dbots_infrastructure::{AppConfig, AppContext, ConfigLoader};
use serde_json::json;

/// Command line interface for dbots
#[derive(Parser, Debug)]
#[command(name = "dbots")]
#[command(about = "Post Discord bot statistics to bot-list websites")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print requests instead of sending them
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// dbots subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List services
    Services {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Post the configured stats to one service
    Post {
        /// Service key or alias
        service: String,
    },
    /// Post the configured stats to every service with an API key
    PostAll,
    /// Fetch a bot's listing entry from a service
    Bot {
        /// Service key or alias
        service: String,
        /// Bot ID
        id: String,
    },
}

impl Cli {
    /// Load configuration from `--config`, default locations and environment
    pub fn load_config(&self) -> anyhow::Result<AppConfig> {
        let loader = match &self.config {
            Some(path) => ConfigLoader::new().with_config_path(path),
            None => ConfigLoader::new(),
        };
        loader.load().context("Failed to load configuration")
    }

    /// Wire the application context for this invocation
    pub fn context(&self, config: AppConfig) -> anyhow::Result<AppContext> {
        let context = if self.dry_run {
            AppContext::dry_run(config)
        } else {
            AppContext::new(config)
        };
        context.context("Failed to initialize")
    }
}

/// Run a command, writing its output to `out`
pub async fn execute(
    command: &Command,
    context: &AppContext,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match command {
        Command::Services { json } => list_services(context, *json, out),
        Command::Post { service } => {
            let response = context.poster().post(service).await?;
            print_response(out, service, &response)
        }
        Command::PostAll => {
            let outcomes = context.poster().post_all().await?;
            let mut failed = 0;
            for outcome in &outcomes {
                match &outcome.result {
                    Ok(response) => print_response(out, &outcome.service, response)?,
                    Err(err) => {
                        failed += 1;
                        writeln!(out, "{}: error: {err}", outcome.service)?;
                    }
                }
            }
            if failed > 0 {
                anyhow::bail!("{failed} of {} posts failed", outcomes.len());
            }
            Ok(())
        }
        Command::Bot { service, id } => {
            let descriptor = context.resolve(service)?.clone();
            let token = context
                .config()
                .poster
                .api_keys
                .iter()
                .find(|(name, _)| descriptor.matches(name))
                .map(|(_, token)| token.clone());
            let client = ServiceClient::new(descriptor, token, context.transport());
            let response = client.get_bot(id).await?;
            print_response(out, service, &response)
        }
    }
}

fn list_services(context: &AppContext, as_json: bool, out: &mut dyn Write) -> anyhow::Result<()> {
    let services: Vec<&ServiceDescriptor> = context
        .registry()
        .list()
        .into_iter()
        .chain(context.custom_services())
        .collect();

    if as_json {
        let entries: Vec<_> = services
            .iter()
            .map(|service| {
                json!({
                    "key": service.key,
                    "aliases": service.aliases,
                    "name": service.display_name,
                    "base_url": service.base_url,
                    "deprecated": service.deprecated,
                })
            })
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
        return Ok(());
    }

    for service in services {
        let marker = if service.deprecated { " (deprecated)" } else { "" };
        writeln!(
            out,
            "{:<20} {}{}",
            service.key,
            service.aliases.join(", "),
            marker
        )?;
    }
    Ok(())
}

fn print_response(out: &mut dyn Write, service: &str, response: &ServiceResponse) -> anyhow::Result<()> {
    if response.body.is_null() {
        writeln!(out, "{service}: {}", response.status)?;
    } else {
        writeln!(out, "{service}: {} {}", response.status, response.body)?;
    }
    Ok(())
}
