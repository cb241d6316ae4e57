use georegion_core::{GeoPoint, QueryStats};
use serde::Serialize;
use tabled::Tabled;

/// Output for circle, polygon and rect commands
#[derive(Debug, Serialize)]
pub struct RegionOutput {
    pub shape: String,
    pub matched: usize,
    pub points: Vec<GeoPoint>,
    pub explanation: Option<Explanation>,
}

/// How a region query was evaluated
#[derive(Debug, Serialize)]
pub struct Explanation {
    pub geodesic: bool,
    pub sphere_radius_meters: f64,
    /// Prefilter box as [west, south, east, north]
    pub bbox: [f64; 4],
    pub crosses_antimeridian: bool,
    pub parallel: bool,
    /// Only collected for sequential runs
    pub stats: Option<QueryStats>,
}

/// Table row for a matched point
#[derive(Debug, Tabled)]
pub struct PointRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Longitude")]
    pub longitude: f64,
    #[tabled(rename = "Latitude")]
    pub latitude: f64,
}

impl PointRow {
    pub fn rows(points: &[GeoPoint]) -> Vec<PointRow> {
        points
            .iter()
            .enumerate()
            .map(|(i, p)| PointRow { index: i + 1, longitude: p.longitude, latitude: p.latitude })
            .collect()
    }
}

/// Output for config command
#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    pub sphere_radius_meters: ConfigEntry,
    pub geodesic: ConfigEntry,
    pub polygon_sides: ConfigEntry,
    pub distance_unit: ConfigEntry,
    pub parallel_threshold: ConfigEntry,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigEntry {
    pub value: String,
    pub source: String,
}
