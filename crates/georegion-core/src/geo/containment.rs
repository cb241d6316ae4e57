//! Point-in-shape tests.
//!
//! Every test is boundary-inclusive: a point on a circle's rim, on a polygon
//! edge or vertex, or on a rectangle side is contained.

use crate::geo::distance::haversine_distance;
use crate::models::{
    Circle, GeoPoint, PlanarPoint, Polygon, RegionQueryOptions, Shape, DEFAULT_SPHERE_RADIUS_METERS,
};

/// How circles are evaluated
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainmentMode {
    /// Sphere radius in meters, used for haversine distance and for the
    /// Mercator projection in planar mode
    pub sphere_radius_meters: f64,

    /// Great-circle distance when true, Euclidean Mercator distance when false
    pub geodesic: bool,
}

impl ContainmentMode {
    /// Resolve the mode for a shape: the options' sphere radius wins when it
    /// is positive, then the circle's own radius, then the default
    pub fn resolve(shape: &Shape, options: &RegionQueryOptions) -> Self {
        let fallback = match shape {
            Shape::Circle(circle) => circle.sphere_radius_meters,
            _ => DEFAULT_SPHERE_RADIUS_METERS,
        };

        Self {
            sphere_radius_meters: options.resolve_sphere_radius(fallback),
            geodesic: options.is_geodesic(),
        }
    }
}

impl Default for ContainmentMode {
    fn default() -> Self {
        Self { sphere_radius_meters: DEFAULT_SPHERE_RADIUS_METERS, geodesic: true }
    }
}

/// Check whether a point lies inside or on a circle, using haversine
/// distance on the circle's own sphere radius
pub fn circle_contains_geodesic(point: &GeoPoint, circle: &Circle) -> bool {
    haversine_distance(point, &circle.center, circle.sphere_radius_meters) <= circle.radius_meters
}

/// Check whether a projected point lies inside or on a circle in the same
/// projected space.
///
/// In Mercator space this over-states distances away from the equator
/// (by 1/cos(latitude)) and distorts large circles; it is only used when
/// planar evaluation is requested explicitly.
pub fn circle_contains_planar(point: &PlanarPoint, center: &PlanarPoint, radius_meters: f64) -> bool {
    point.distance(center) <= radius_meters
}

/// Check whether a point lies inside or on a polygon.
///
/// Points on an edge or vertex are inside. Otherwise even-odd ray casting
/// toward +x decides; an edge is counted only when the point's y lies in
/// the half-open span `[min(y1, y2), max(y1, y2))`, so a ray through a
/// vertex is counted once and horizontal edges never count.
pub fn polygon_contains(point: &PlanarPoint, polygon: &Polygon) -> bool {
    let mut inside = false;

    for (a, b) in polygon.edges() {
        if on_segment(point, a, b) {
            return true;
        }

        if (a.y > point.y) != (b.y > point.y) {
            let x_cross = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if point.x < x_cross {
                inside = !inside;
            }
        }
    }

    inside
}

/// Check whether a point lies inside or on an axis-aligned box
pub fn rectangle_contains(point: &GeoPoint, min_corner: &GeoPoint, max_corner: &GeoPoint) -> bool {
    (min_corner.longitude..=max_corner.longitude).contains(&point.longitude)
        && (min_corner.latitude..=max_corner.latitude).contains(&point.latitude)
}

/// Check whether a point lies inside or on a shape
pub fn shape_contains(shape: &Shape, point: &GeoPoint, mode: &ContainmentMode) -> bool {
    match shape {
        Shape::Circle(circle) if mode.geodesic => {
            let circle = circle.sphere_radius(mode.sphere_radius_meters);
            circle_contains_geodesic(point, &circle)
        }
        Shape::Circle(circle) => circle_contains_planar(
            &point.project_mercator(mode.sphere_radius_meters),
            &circle.center.project_mercator(mode.sphere_radius_meters),
            circle.radius_meters,
        ),
        Shape::Polygon(polygon) => polygon_contains(&point.to_planar(), polygon),
        Shape::Rectangle(rect) => {
            rectangle_contains(point, &rect.min_corner(), &rect.max_corner())
        }
    }
}

/// Exact test for `p` lying on the closed segment `a`-`b`
fn on_segment(p: &PlanarPoint, a: &PlanarPoint, b: &PlanarPoint) -> bool {
    let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
    cross == 0.0
        && p.x >= a.x.min(b.x)
        && p.x <= a.x.max(b.x)
        && p.y >= a.y.min(b.y)
        && p.y <= a.y.max(b.y)
}
