use super::region;
use crate::cli::RectArgs;
use crate::output::OutputWriter;
use anyhow::Result;
use georegion_core::config::LayeredConfig;
use georegion_core::Shape;

pub fn execute(
    args: RectArgs,
    config: &LayeredConfig,
    output: &OutputWriter,
    explain: bool,
) -> Result<()> {
    let shape = Shape::rectangle(args.min, args.max);
    region::run("rect", shape, &args.input, config, output, explain)
}
