//! GeoRegion CLI - Command-line interface
//!
//! Filters GeoJSON points by circle, polygon or rectangle.

mod cli;
mod commands;
mod config_loader;
mod errors;
mod input;
mod output;
mod output_types;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use errors::CliError;

fn main() -> Result<()> {
    // Initialize tracing; logs go to stderr so JSON output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();
    let json = cli.json;

    // Execute the command
    if let Err(err) = commands::execute(cli) {
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            cli_err.display(json);
            std::process::exit(1);
        }
        return Err(err);
    }

    Ok(())
}
