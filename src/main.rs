//! pathignore CLI
//!
//! Command-line front end for the pathignore matching library.

use anyhow::Result;
use clap::Parser;
use pathignore::cli::{commands, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Execute the command
    match cli.command {
        Commands::Check {
            patterns,
            json,
            paths,
        } => commands::check::execute(patterns, json, paths),
        Commands::Dirs { patterns } => commands::dirs::execute(patterns),
    }
}
