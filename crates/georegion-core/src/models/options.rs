use serde::{Deserialize, Serialize};

/// Vertex count used when a circle is approximated as a polygon
pub const DEFAULT_POLYGON_SIDES: u32 = 128;

/// Per-query options
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionQueryOptions {
    /// Overrides the circle's sphere radius when present and positive
    pub sphere_radius_meters: Option<f64>,

    /// Great-circle distance for circles (default) or Euclidean distance in
    /// spherical Mercator space
    pub geodesic: Option<bool>,

    /// Vertex count for circle outlines; does not affect containment
    pub polygon_sides: Option<u32>,
}

impl RegionQueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sphere_radius(mut self, sphere_radius_meters: f64) -> Self {
        self.sphere_radius_meters = Some(sphere_radius_meters);
        self
    }

    pub fn geodesic(mut self, geodesic: bool) -> Self {
        self.geodesic = Some(geodesic);
        self
    }

    pub fn polygon_sides(mut self, sides: u32) -> Self {
        self.polygon_sides = Some(sides);
        self
    }

    /// The configured sphere radius if it is usable, otherwise `fallback`
    pub fn resolve_sphere_radius(&self, fallback: f64) -> f64 {
        match self.sphere_radius_meters {
            Some(r) if r.is_finite() && r > 0.0 => r,
            _ => fallback,
        }
    }

    pub fn is_geodesic(&self) -> bool {
        self.geodesic.unwrap_or(true)
    }

    pub fn sides(&self) -> u32 {
        self.polygon_sides.filter(|n| *n >= 3).unwrap_or(DEFAULT_POLYGON_SIDES)
    }
}
