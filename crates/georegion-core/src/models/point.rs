//! Geographic and planar point types.
//!
//! `GeoPoint` carries longitude/latitude in degrees (WGS84-like). `PlanarPoint`
//! carries x/y in a projected space and is only used where geodesic accuracy
//! is not required.

use crate::error::{GeoregionError, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_4;
use std::fmt;
use std::str::FromStr;

/// Mean Earth radius in meters
pub const DEFAULT_SPHERE_RADIUS_METERS: f64 = 6_371_000.0;

/// WGS84 equatorial radius in meters
pub const WGS84_EQUATORIAL_RADIUS_METERS: f64 = 6_378_137.0;

/// Latitude where spherical Mercator y reaches ±πR (Web Mercator limit)
pub const MERCATOR_MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// A geographic point in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

impl GeoPoint {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self { longitude, latitude }
    }

    /// Both coordinates finite and inside [-180, 180] x [-90, 90]
    pub fn is_valid(&self) -> bool {
        self.longitude.is_finite()
            && self.latitude.is_finite()
            && (-180.0..=180.0).contains(&self.longitude)
            && (-90.0..=90.0).contains(&self.latitude)
    }

    /// Validate this point as a shape parameter.
    ///
    /// Out-of-range values are rejected, never normalized.
    pub fn validate(&self, location: &str) -> Result<()> {
        if !self.longitude.is_finite() || !self.latitude.is_finite() {
            return Err(GeoregionError::invalid_coordinate(
                location,
                format!("coordinates must be finite, got {}", self),
            ));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(GeoregionError::invalid_coordinate(
                location,
                format!("longitude {} is outside [-180, 180]", self.longitude),
            ));
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(GeoregionError::invalid_coordinate(
                location,
                format!("latitude {} is outside [-90, 90]", self.latitude),
            ));
        }
        Ok(())
    }

    /// Plate carrée view of the point: x = longitude, y = latitude
    pub fn to_planar(&self) -> PlanarPoint {
        PlanarPoint::new(self.longitude, self.latitude)
    }

    /// Spherical Mercator projection onto a sphere of the given radius (meters).
    ///
    /// Latitudes beyond [`MERCATOR_MAX_LATITUDE`] are clamped to it, so the
    /// poles land on the edge of the square world instead of at infinity.
    pub fn project_mercator(&self, sphere_radius_meters: f64) -> PlanarPoint {
        let latitude = self.latitude.clamp(-MERCATOR_MAX_LATITUDE, MERCATOR_MAX_LATITUDE);
        let x = sphere_radius_meters * self.longitude.to_radians();
        let y = sphere_radius_meters * (FRAC_PI_4 + latitude.to_radians() / 2.0).tan().ln();
        PlanarPoint::new(x, y)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.longitude, self.latitude)
    }
}

/// Parse "LON,LAT" (whitespace around either value is allowed)
impl FromStr for GeoPoint {
    type Err = GeoregionError;

    fn from_str(s: &str) -> Result<Self> {
        let (lon_str, lat_str) = s.split_once(',').ok_or_else(|| {
            GeoregionError::invalid_coordinate(s, "expected LON,LAT".to_string())
        })?;

        let longitude: f64 = lon_str.trim().parse().map_err(|_| {
            GeoregionError::invalid_coordinate(s, format!("invalid longitude '{}'", lon_str.trim()))
        })?;
        let latitude: f64 = lat_str.trim().parse().map_err(|_| {
            GeoregionError::invalid_coordinate(s, format!("invalid latitude '{}'", lat_str.trim()))
        })?;

        Ok(Self::new(longitude, latitude))
    }
}

/// A point in a projected (planar) coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

impl PlanarPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in the projected space
    pub fn distance(&self, other: &PlanarPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Inverse of [`GeoPoint::project_mercator`]
    pub fn unproject_mercator(&self, sphere_radius_meters: f64) -> GeoPoint {
        let longitude = (self.x / sphere_radius_meters).to_degrees();
        let latitude =
            (2.0 * (self.y / sphere_radius_meters).exp().atan() - 2.0 * FRAC_PI_4).to_degrees();
        GeoPoint::new(longitude, latitude)
    }
}

impl From<PlanarPoint> for geo::Coord<f64> {
    fn from(p: PlanarPoint) -> Self {
        geo::Coord { x: p.x, y: p.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity_ranges() {
        assert!(GeoPoint::new(180.0, 90.0).is_valid());
        assert!(GeoPoint::new(-180.0, -90.0).is_valid());
        assert!(!GeoPoint::new(180.1, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, -90.5).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_validate_reports_location() {
        let err = GeoPoint::new(200.0, 0.0).validate("circle center").unwrap_err();
        match err {
            GeoregionError::InvalidCoordinate { location, reason } => {
                assert_eq!(location, "circle center");
                assert!(reason.contains("longitude"));
            }
            other => panic!("Expected InvalidCoordinate, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_lon_lat() {
        let p: GeoPoint = "115.2625, -8.5069".parse().unwrap();
        assert_eq!(p, GeoPoint::new(115.2625, -8.5069));

        assert!("115.2625".parse::<GeoPoint>().is_err());
        assert!("abc,1".parse::<GeoPoint>().is_err());
        assert!("1,".parse::<GeoPoint>().is_err());
    }

    #[test]
    fn test_mercator_roundtrip() {
        let p = GeoPoint::new(13.4, 52.5);
        let back = p.project_mercator(DEFAULT_SPHERE_RADIUS_METERS)
            .unproject_mercator(DEFAULT_SPHERE_RADIUS_METERS);
        assert!((back.longitude - p.longitude).abs() < 1e-9);
        assert!((back.latitude - p.latitude).abs() < 1e-9);
    }

    #[test]
    fn test_mercator_origin() {
        let origin = GeoPoint::new(0.0, 0.0).project_mercator(WGS84_EQUATORIAL_RADIUS_METERS);
        assert!(origin.x.abs() < 1e-9);
        assert!(origin.y.abs() < 1e-9);
    }

    #[test]
    fn test_mercator_poles_stay_finite() {
        let south = GeoPoint::new(0.0, -90.0).project_mercator(DEFAULT_SPHERE_RADIUS_METERS);
        let north = GeoPoint::new(0.0, 90.0).project_mercator(DEFAULT_SPHERE_RADIUS_METERS);
        assert!(south.y.is_finite() && north.y.is_finite());
        assert!((south.y + north.y).abs() < 1e-6);

        let limit = GeoPoint::new(0.0, MERCATOR_MAX_LATITUDE).project_mercator(1.0);
        assert!((limit.y - std::f64::consts::PI).abs() < 1e-9);
        let near_pole = GeoPoint::new(0.0, 89.0).project_mercator(DEFAULT_SPHERE_RADIUS_METERS);
        assert_eq!(north.distance(&near_pole), 0.0);
    }

    #[test]
    fn test_planar_distance() {
        let a = PlanarPoint::new(0.0, 0.0);
        let b = PlanarPoint::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
    }
}
