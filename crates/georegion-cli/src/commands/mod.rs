//! Command implementations

mod circle;
mod config;
mod outline;
mod polygon;
mod rect;
mod region;

use crate::cli::{Cli, Commands};
use crate::config_loader::load_config_with_overrides;
use crate::output::OutputWriter;
use anyhow::Result;
use georegion_core::config::CliConfigOverrides;

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);

    let overrides = match cli.command {
        Commands::Circle(ref args) => CliConfigOverrides {
            sphere_radius_meters: args.sphere_radius,
            geodesic: args.planar.then_some(false),
            ..Default::default()
        },
        Commands::Outline(ref args) => CliConfigOverrides {
            sphere_radius_meters: args.sphere_radius,
            polygon_sides: args.sides,
            ..Default::default()
        },
        _ => CliConfigOverrides::default(),
    };
    let config = load_config_with_overrides(cli.config.as_deref(), overrides)?;

    match cli.command {
        Commands::Circle(args) => circle::execute(args, &config, &output, cli.explain),
        Commands::Polygon(args) => polygon::execute(args, &config, &output, cli.explain),
        Commands::Rect(args) => rect::execute(args, &config, &output, cli.explain),
        Commands::Outline(args) => outline::execute(args, &config, &output),
        Commands::Config => config::execute(&config, &output),
    }
}
