use super::region;
use crate::cli::PolygonArgs;
use crate::output::OutputWriter;
use anyhow::Result;
use georegion_core::config::LayeredConfig;
use georegion_core::Shape;

pub fn execute(
    args: PolygonArgs,
    config: &LayeredConfig,
    output: &OutputWriter,
    explain: bool,
) -> Result<()> {
    let shape = Shape::polygon(&args.vertices);
    region::run("polygon", shape, &args.input, config, output, explain)
}
