//! GeoJSON point input

use crate::errors;
use anyhow::Result;
use geojson::{Feature, GeoJson, Geometry, Value};
use georegion_core::GeoPoint;
use std::io::Read;
use std::path::Path;

/// Read points from a GeoJSON file, or stdin when `path` is "-"
pub fn read_points(path: &Path) -> Result<Vec<Option<GeoPoint>>> {
    let (source, content) = if path.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        ("stdin".to_string(), content)
    } else {
        if !path.exists() {
            return Err(errors::input_not_found(path).into());
        }
        (path.display().to_string(), std::fs::read_to_string(path)?)
    };

    let points = parse_points(&content).map_err(|e| errors::invalid_input(&source, e))?;

    tracing::debug!(source = %source, entries = points.len(), "Read input points");
    Ok(points)
}

/// Extract points from GeoJSON text.
///
/// Each feature yields one entry. Features without a usable Point geometry
/// yield `None` so that positions line up with the input.
pub fn parse_points(content: &str) -> Result<Vec<Option<GeoPoint>>, geojson::Error> {
    let geojson = content.parse::<GeoJson>()?;

    let points = match geojson {
        GeoJson::FeatureCollection(collection) => {
            collection.features.iter().flat_map(feature_points).collect()
        }
        GeoJson::Feature(feature) => feature_points(&feature),
        GeoJson::Geometry(geometry) => geometry_points(&geometry),
    };

    Ok(points)
}

fn feature_points(feature: &Feature) -> Vec<Option<GeoPoint>> {
    match feature.geometry {
        Some(ref geometry) => geometry_points(geometry),
        None => vec![None],
    }
}

fn geometry_points(geometry: &Geometry) -> Vec<Option<GeoPoint>> {
    match geometry.value {
        Value::Point(ref position) => vec![position_to_point(position)],
        Value::MultiPoint(ref positions) => positions.iter().map(|p| position_to_point(p)).collect(),
        _ => vec![None],
    }
}

fn position_to_point(position: &[f64]) -> Option<GeoPoint> {
    match position {
        [lon, lat, ..] => Some(GeoPoint::new(*lon, *lat)),
        _ => None,
    }
}
