//! dbots - Entry Point
//!
//! Loads configuration, initializes logging and runs one command.

use clap::Parser;
use dbots::cli::{Cli, execute};
use dbots::infrastructure::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    init_logging(&config.logging)?;

    let context = cli.context(config)?;
    let mut stdout = std::io::stdout().lock();
    execute(&cli.command, &context, &mut stdout).await
}
