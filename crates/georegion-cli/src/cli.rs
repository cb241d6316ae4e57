use clap::{Args, Parser, Subcommand};
use georegion_core::GeoPoint;
use std::path::PathBuf;

/// GeoRegion - Find the points that fall inside a region
#[derive(Parser, Debug)]
#[command(name = "georegion")]
#[command(about = "Filter geographic points by circle, polygon or rectangle", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to ./georegion.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Show how the query was evaluated
    #[arg(long, global = true)]
    pub explain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Points within a distance of a center
    Circle(CircleArgs),

    /// Points inside a polygon
    Polygon(PolygonArgs),

    /// Points inside a longitude/latitude rectangle
    Rect(RectArgs),

    /// Print a circle approximated as a GeoJSON polygon
    Outline(OutlineArgs),

    /// Show effective configuration and where each value came from
    Config,
}

/// Arguments shared by every region query
#[derive(Args, Debug)]
pub struct InputArgs {
    /// GeoJSON file with Point features, or "-" for stdin
    pub input: PathBuf,

    /// Evaluate points on all cores regardless of input size
    #[arg(long)]
    pub parallel: bool,
}

#[derive(Parser, Debug)]
pub struct CircleArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Circle center as LON,LAT
    #[arg(long, allow_hyphen_values = true, value_name = "LON,LAT")]
    pub center: GeoPoint,

    /// Radius with optional unit (e.g., "5km", "250m", "3mi")
    #[arg(long, allow_hyphen_values = true)]
    pub radius: String,

    /// Sphere radius in meters used for distances
    #[arg(long, allow_hyphen_values = true, value_name = "METERS")]
    pub sphere_radius: Option<f64>,

    /// Measure distance in spherical Mercator space instead of along the sphere
    #[arg(long)]
    pub planar: bool,
}

#[derive(Parser, Debug)]
pub struct PolygonArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Polygon vertex as LON,LAT (repeat for each vertex, at least 3)
    #[arg(long = "vertex", required = true, allow_hyphen_values = true, value_name = "LON,LAT")]
    pub vertices: Vec<GeoPoint>,
}

#[derive(Parser, Debug)]
pub struct RectArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// One corner as LON,LAT
    #[arg(long, allow_hyphen_values = true, value_name = "LON,LAT")]
    pub min: GeoPoint,

    /// The opposite corner as LON,LAT
    #[arg(long, allow_hyphen_values = true, value_name = "LON,LAT")]
    pub max: GeoPoint,
}

#[derive(Parser, Debug)]
pub struct OutlineArgs {
    /// Circle center as LON,LAT
    #[arg(long, allow_hyphen_values = true, value_name = "LON,LAT")]
    pub center: GeoPoint,

    /// Radius with optional unit (e.g., "5km", "250m", "3mi")
    #[arg(long, allow_hyphen_values = true)]
    pub radius: String,

    /// Number of polygon vertices
    #[arg(long)]
    pub sides: Option<u32>,

    /// Sphere radius in meters used to place the vertices
    #[arg(long, allow_hyphen_values = true, value_name = "METERS")]
    pub sphere_radius: Option<f64>,
}
