//! Shared evaluation and reporting for region queries

use crate::cli::InputArgs;
use crate::errors;
use crate::input::read_points;
use crate::output::OutputWriter;
use crate::output_types::{Explanation, PointRow, RegionOutput};
use anyhow::Result;
use georegion_core::config::LayeredConfig;
use georegion_core::geo::valid_points;
use georegion_core::models::parse_distance;
use georegion_core::{RegionQuery, Shape};

/// Parse a radius, reading bare numbers in the configured unit
pub fn parse_radius(value: &str, config: &LayeredConfig) -> Result<f64> {
    let distance = parse_distance(value, config.distance_unit.value)
        .map_err(|e| errors::invalid_radius(value, e))?;
    Ok(distance.to_meters())
}

/// Validate the shape, filter the input and print the matches
pub fn run(
    command: &str,
    shape: Shape,
    input: &InputArgs,
    config: &LayeredConfig,
    output: &OutputWriter,
    explain: bool,
) -> Result<()> {
    // Reject a bad shape before touching the input
    let query = RegionQuery::new(shape, &config.to_query_options())
        .map_err(|e| errors::invalid_shape(&e, command))?;

    let points = read_points(&input.input)?;

    let threshold = config.parallel_threshold.value;
    let parallel = input.parallel || points.len() >= threshold;
    if parallel && !input.parallel {
        tracing::info!(points = points.len(), threshold, "Large input, evaluating in parallel");
    }

    let (matches, stats) = if parallel {
        (query.run_par(Some(points.as_slice())), None)
    } else {
        let (matches, stats) = query.run_with_stats(Some(points.as_slice()));
        (matches, Some(stats))
    };

    let explanation = explain.then(|| Explanation {
        geodesic: query.mode().geodesic,
        sphere_radius_meters: query.mode().sphere_radius_meters,
        bbox: query.extent().to_bbox(),
        crosses_antimeridian: query.extent().crosses_antimeridian(),
        parallel,
        stats,
    });

    if output.is_json() {
        return output.result(RegionOutput {
            shape: query.shape().kind().to_string(),
            matched: matches.len(),
            points: matches,
            explanation,
        });
    }

    output.section("Matches");
    output.table(PointRow::rows(&matches));

    if let Some(explanation) = explanation {
        output.section("Evaluation");
        output.kv("Distance", if explanation.geodesic { "great-circle" } else { "planar (Mercator)" });
        output.kv("Sphere radius", format!("{} m", explanation.sphere_radius_meters));
        let [west, south, east, north] = explanation.bbox;
        output.kv("Prefilter box", format!("[{:.6}, {:.6}, {:.6}, {:.6}]", west, south, east, north));
        if explanation.crosses_antimeridian {
            output.info("Prefilter box crosses the antimeridian");
        }
        output.kv("Parallel", explanation.parallel);
        if let Some(stats) = explanation.stats {
            output.kv("Input entries", stats.total);
            output.kv("Skipped (missing or invalid)", stats.skipped);
            output.kv("Passed prefilter", stats.prefiltered);
        }
    }

    let skipped = points.len() - valid_points(&points).count();
    if skipped > 0 {
        output.warning(format!("Skipped {} entries without a valid point", skipped));
    }

    output.success(format!(
        "{} of {} points inside the {}",
        matches.len(),
        points.len(),
        query.shape().kind()
    ));

    Ok(())
}
