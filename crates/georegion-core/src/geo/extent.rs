//! Bounding extents and the extent prefilter.
//!
//! Extents are conservative: they may be slightly larger than the shape but
//! never smaller, so prefiltering cannot drop a point the exact test keeps.

use crate::geo::containment::ContainmentMode;
use crate::models::{GeoPoint, PlanarPoint, Shape, MERCATOR_MAX_LATITUDE};
use geo::algorithm::bounding_rect::BoundingRect;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Margin added on every side of a computed extent, in degrees (~0.1 mm)
pub const EXTENT_MARGIN_DEGREES: f64 = 1e-9;

/// Axis-aligned lon/lat box.
///
/// `min_lon > max_lon` means the box crosses the antimeridian, as in a
/// GeoJSON bbox.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl Extent {
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self { min_lon, min_lat, max_lon, max_lat }
    }

    /// The whole globe
    pub fn world() -> Self {
        Self::new(-180.0, -90.0, 180.0, 90.0)
    }

    pub fn crosses_antimeridian(&self) -> bool {
        self.min_lon > self.max_lon
    }

    /// Inclusive containment, wrapping longitude when crossing the antimeridian
    pub fn contains(&self, point: &GeoPoint) -> bool {
        let lat_ok = point.latitude >= self.min_lat && point.latitude <= self.max_lat;
        let lon_ok = if self.crosses_antimeridian() {
            point.longitude >= self.min_lon || point.longitude <= self.max_lon
        } else {
            point.longitude >= self.min_lon && point.longitude <= self.max_lon
        };
        lat_ok && lon_ok
    }

    /// GeoJSON bbox order: [west, south, east, north]
    pub fn to_bbox(&self) -> [f64; 4] {
        [self.min_lon, self.min_lat, self.max_lon, self.max_lat]
    }

    fn widen(self, margin: f64) -> Self {
        Self::new(
            self.min_lon - margin,
            (self.min_lat - margin).max(-90.0),
            self.max_lon + margin,
            (self.max_lat + margin).min(90.0),
        )
    }
}

impl From<geo::Rect<f64>> for Extent {
    fn from(rect: geo::Rect<f64>) -> Self {
        Self::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y)
    }
}

/// Compute the bounding extent of a shape.
///
/// The shape is assumed valid; see [`crate::geo::validation::ensure_valid`].
pub fn bounding_extent(shape: &Shape, mode: &ContainmentMode) -> Extent {
    match shape {
        Shape::Circle(circle) if mode.geodesic => {
            geodesic_circle_extent(&circle.center, circle.radius_meters, mode.sphere_radius_meters)
        }
        Shape::Circle(circle) => {
            planar_circle_extent(&circle.center, circle.radius_meters, mode.sphere_radius_meters)
        }
        Shape::Polygon(polygon) => polygon
            .to_geo()
            .bounding_rect()
            .map(Extent::from)
            .unwrap_or_else(Extent::world)
            .widen(EXTENT_MARGIN_DEGREES),
        Shape::Rectangle(rect) => {
            let min = rect.min_corner();
            let max = rect.max_corner();
            Extent::new(min.longitude, min.latitude, max.longitude, max.latitude)
                .widen(EXTENT_MARGIN_DEGREES)
        }
    }
}

/// Extent of a spherical cap.
///
/// Latitude bounds are center ± the angular radius. When the cap reaches a
/// pole every longitude is covered; otherwise the longitude half-width is
/// asin(sin δ / cos φ), which grows toward the poles.
fn geodesic_circle_extent(center: &GeoPoint, radius_meters: f64, sphere_radius_meters: f64) -> Extent {
    let delta = radius_meters / sphere_radius_meters;
    if delta >= PI {
        return Extent::world();
    }

    let lat = center.latitude.to_radians();
    let lat_min = (lat - delta).to_degrees() - EXTENT_MARGIN_DEGREES;
    let lat_max = (lat + delta).to_degrees() + EXTENT_MARGIN_DEGREES;

    if lat_max >= 90.0 || lat_min <= -90.0 {
        return Extent::new(-180.0, lat_min.max(-90.0), 180.0, lat_max.min(90.0));
    }

    let ratio = delta.sin() / lat.cos();
    if ratio >= 1.0 {
        return Extent::new(-180.0, lat_min, 180.0, lat_max);
    }

    let half_width = ratio.asin().to_degrees() + EXTENT_MARGIN_DEGREES;
    let mut min_lon = center.longitude - half_width;
    let mut max_lon = center.longitude + half_width;

    if min_lon < -180.0 && max_lon > 180.0 {
        min_lon = -180.0;
        max_lon = 180.0;
    } else if min_lon < -180.0 {
        min_lon += 360.0;
    } else if max_lon > 180.0 {
        max_lon -= 360.0;
    }

    Extent::new(min_lon, lat_min, max_lon, lat_max)
}

/// Extent of a circle drawn in spherical Mercator space.
///
/// Mercator x depends only on longitude and y only on latitude, so the
/// projected square around the circle maps back to an exact lon/lat box.
/// Latitudes past the Mercator limit project onto it, so a box touching the
/// limit extends to the pole.
fn planar_circle_extent(center: &GeoPoint, radius_meters: f64, sphere_radius_meters: f64) -> Extent {
    let c = center.project_mercator(sphere_radius_meters);
    let y_north = GeoPoint::new(0.0, MERCATOR_MAX_LATITUDE).project_mercator(sphere_radius_meters).y;
    let y_south = GeoPoint::new(0.0, -MERCATOR_MAX_LATITUDE).project_mercator(sphere_radius_meters).y;
    let south_west = PlanarPoint::new(c.x - radius_meters, c.y - radius_meters)
        .unproject_mercator(sphere_radius_meters);
    let north_east = PlanarPoint::new(c.x + radius_meters, c.y + radius_meters)
        .unproject_mercator(sphere_radius_meters);

    let min_lat = if c.y - radius_meters <= y_south { -90.0 } else { south_west.latitude };
    let max_lat = if c.y + radius_meters >= y_north { 90.0 } else { north_east.latitude };

    Extent::new(
        south_west.longitude.max(-180.0),
        min_lat,
        north_east.longitude.min(180.0),
        max_lat,
    )
    .widen(EXTENT_MARGIN_DEGREES)
}

/// Keep the points inside `extent`, in input order, skipping missing and
/// invalid entries
pub fn prefilter(points: &[Option<GeoPoint>], extent: &Extent) -> Vec<GeoPoint> {
    valid_points(points).filter(|p| extent.contains(p)).collect()
}

/// Present points with finite, in-range coordinates, in input order
pub fn valid_points(points: &[Option<GeoPoint>]) -> impl Iterator<Item = GeoPoint> + '_ {
    points.iter().flatten().filter(|p| p.is_valid()).copied()
}
