use super::region::{self, parse_radius};
use crate::cli::CircleArgs;
use crate::output::OutputWriter;
use anyhow::Result;
use georegion_core::config::LayeredConfig;
use georegion_core::Circle;

pub fn execute(
    args: CircleArgs,
    config: &LayeredConfig,
    output: &OutputWriter,
    explain: bool,
) -> Result<()> {
    let radius_meters = parse_radius(&args.radius, config)?;
    let circle = Circle::new(args.center, radius_meters)
        .sphere_radius(config.sphere_radius_meters.value);

    region::run("circle", circle.into(), &args.input, config, output, explain)
}
