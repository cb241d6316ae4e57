//! Great-circle distance on a sphere of configurable radius.

use crate::models::GeoPoint;

/// Central angle between two points on the unit sphere, in radians
pub fn angular_distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

    // Rounding can push h marginally outside [0, 1] for antipodal points
    let h = h.clamp(0.0, 1.0);
    2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Haversine distance in meters between two points on a sphere of radius
/// `sphere_radius_meters`.
///
/// Inputs are not validated; callers filter invalid coordinates first.
pub fn haversine_distance(a: &GeoPoint, b: &GeoPoint, sphere_radius_meters: f64) -> f64 {
    sphere_radius_meters * angular_distance(a, b)
}

/// Point reached by travelling `distance_meters` from `origin` along the
/// great circle with initial bearing `bearing_degrees` (clockwise from north).
pub fn destination(
    origin: &GeoPoint,
    bearing_degrees: f64,
    distance_meters: f64,
    sphere_radius_meters: f64,
) -> GeoPoint {
    let delta = distance_meters / sphere_radius_meters;
    let theta = bearing_degrees.to_radians();
    let lat1 = origin.latitude.to_radians();
    let lon1 = origin.longitude.to_radians();

    let sin_lat2 = lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos();
    let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();
    let lon2 = lon1
        + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * sin_lat2);

    GeoPoint::new(normalize_longitude(lon2.to_degrees()), lat2.to_degrees())
}

/// Wrap a longitude into [-180, 180]
fn normalize_longitude(lon: f64) -> f64 {
    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 && lon > 0.0 {
        180.0
    } else {
        wrapped
    }
}
