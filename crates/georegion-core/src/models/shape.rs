//! Region descriptors.
//!
//! `Shape` is a closed set of region kinds. Containment and extent logic
//! dispatch on it with a single `match`.

use super::point::{GeoPoint, PlanarPoint, DEFAULT_SPHERE_RADIUS_METERS};
use crate::geo::distance::destination;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

fn default_sphere_radius() -> f64 {
    DEFAULT_SPHERE_RADIUS_METERS
}

/// Circle around a geographic center, radius in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: GeoPoint,
    pub radius_meters: f64,
    #[serde(default = "default_sphere_radius")]
    pub sphere_radius_meters: f64,
}

impl Circle {
    pub fn new(center: GeoPoint, radius_meters: f64) -> Self {
        Self { center, radius_meters, sphere_radius_meters: DEFAULT_SPHERE_RADIUS_METERS }
    }

    /// Set the radius of the sphere used for distances
    pub fn sphere_radius(mut self, sphere_radius_meters: f64) -> Self {
        self.sphere_radius_meters = sphere_radius_meters;
        self
    }

    /// Approximate the circle as a polygon with `sides` vertices placed at
    /// geodesic distance `radius_meters` from the center.
    ///
    /// Vertices are in longitude/latitude; the ring is left open. Intended for
    /// rendering and interop, containment always uses the exact circle.
    pub fn to_polygon(&self, sides: u32) -> Polygon {
        let sides = sides.max(3);
        let step = 360.0 / f64::from(sides);

        let vertices = (0..sides)
            .map(|i| {
                destination(
                    &self.center,
                    step * f64::from(i),
                    self.radius_meters,
                    self.sphere_radius_meters,
                )
                .to_planar()
            })
            .collect();

        Polygon::new(vertices)
    }
}

/// Polygon ring in a planar space.
///
/// For geographic queries x is longitude and y is latitude. The ring is
/// closed implicitly when the last vertex differs from the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub vertices: Vec<PlanarPoint>,
}

impl Polygon {
    pub fn new(vertices: Vec<PlanarPoint>) -> Self {
        Self { vertices }
    }

    /// Build a lon/lat polygon from geographic vertices
    pub fn from_geo_points(points: &[GeoPoint]) -> Self {
        Self::new(points.iter().map(GeoPoint::to_planar).collect())
    }

    /// Vertices without the duplicated closing vertex, if present
    pub fn open_ring(&self) -> &[PlanarPoint] {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(first), Some(last)) if self.vertices.len() > 1 && first == last => {
                &self.vertices[..self.vertices.len() - 1]
            }
            _ => &self.vertices,
        }
    }

    /// Edges of the closed ring, including the edge from the last vertex back
    /// to the first
    pub fn edges(&self) -> impl Iterator<Item = (&PlanarPoint, &PlanarPoint)> + '_ {
        let ring = self.open_ring();
        let n = ring.len();
        (0..n).map(move |i| (&ring[i], &ring[(i + 1) % n]))
    }

    /// Number of distinct vertices once the ring is closed
    pub fn distinct_vertex_count(&self) -> usize {
        // -0.0 and 0.0 are the same vertex
        let key = |v: f64| if v == 0.0 { 0u64 } else { v.to_bits() };
        self.open_ring().iter().map(|p| (key(p.x), key(p.y))).collect::<HashSet<_>>().len()
    }

    /// Closed `geo` polygon with no interior rings
    pub fn to_geo(&self) -> geo::Polygon<f64> {
        let coords: Vec<geo::Coord<f64>> =
            self.open_ring().iter().map(|p| geo::Coord::from(*p)).collect();
        // geo closes the exterior ring on construction
        geo::Polygon::new(geo::LineString::new(coords), vec![])
    }
}

/// Axis-aligned rectangle defined by two opposite corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub corner_a: GeoPoint,
    pub corner_b: GeoPoint,
}

impl Rectangle {
    pub fn new(corner_a: GeoPoint, corner_b: GeoPoint) -> Self {
        Self { corner_a, corner_b }
    }

    /// South-west corner
    pub fn min_corner(&self) -> GeoPoint {
        GeoPoint::new(
            self.corner_a.longitude.min(self.corner_b.longitude),
            self.corner_a.latitude.min(self.corner_b.latitude),
        )
    }

    /// North-east corner
    pub fn max_corner(&self) -> GeoPoint {
        GeoPoint::new(
            self.corner_a.longitude.max(self.corner_b.longitude),
            self.corner_a.latitude.max(self.corner_b.latitude),
        )
    }
}

/// A region to test points against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    Circle(Circle),
    Polygon(Polygon),
    Rectangle(Rectangle),
}

impl Shape {
    pub fn circle(center: GeoPoint, radius_meters: f64) -> Self {
        Shape::Circle(Circle::new(center, radius_meters))
    }

    pub fn polygon(vertices: &[GeoPoint]) -> Self {
        Shape::Polygon(Polygon::from_geo_points(vertices))
    }

    pub fn rectangle(corner_a: GeoPoint, corner_b: GeoPoint) -> Self {
        Shape::Rectangle(Rectangle::new(corner_a, corner_b))
    }

    /// Short name of the shape kind, used in error messages and logs
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Circle(_) => "circle",
            Shape::Polygon(_) => "polygon",
            Shape::Rectangle(_) => "rectangle",
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}

impl From<Rectangle> for Shape {
    fn from(rectangle: Rectangle) -> Self {
        Shape::Rectangle(rectangle)
    }
}
