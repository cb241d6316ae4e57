//! GeoRegion Core - Region-containment filtering for geographic points
//!
//! This crate decides which points fall inside a circle, polygon or rectangle,
//! using great-circle distance for circles and planar tests for polygons.

pub mod config;
pub mod error;
pub mod geo;
pub mod models;
pub mod query;

pub use error::{GeoregionError, Result};
pub use models::{Circle, GeoPoint, PlanarPoint, Polygon, Rectangle, RegionQueryOptions, Shape};
pub use query::{find_points_in_region, find_points_in_region_par, QueryStats, RegionQuery};
