use super::region::parse_radius;
use crate::cli::OutlineArgs;
use crate::errors;
use crate::output::OutputWriter;
use anyhow::Result;
use geojson::{Geometry, Value};
use georegion_core::config::LayeredConfig;
use georegion_core::geo::ensure_valid;
use georegion_core::{Circle, Shape};

pub fn execute(args: OutlineArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let radius_meters = parse_radius(&args.radius, config)?;
    let circle = Circle::new(args.center, radius_meters)
        .sphere_radius(config.sphere_radius_meters.value);
    ensure_valid(&Shape::Circle(circle)).map_err(|e| errors::invalid_shape(&e, "outline"))?;

    let sides = config.to_query_options().sides();
    let polygon = circle.to_polygon(sides);

    let mut ring: Vec<Vec<f64>> = polygon.open_ring().iter().map(|v| vec![v.x, v.y]).collect();
    if let Some(first) = ring.first().cloned() {
        ring.push(first);
    }
    let geometry = Geometry::new(Value::Polygon(vec![ring]));

    tracing::debug!(sides, radius_meters, "Built circle outline");

    if output.is_json() {
        output.result(&geometry)
    } else {
        output.data(&geometry)
    }
}
