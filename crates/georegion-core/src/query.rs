//! Region queries: validate the shape, prefilter by extent, then apply the
//! exact containment test.

use crate::error::Result;
use crate::geo::containment::{shape_contains, ContainmentMode};
use crate::geo::extent::{bounding_extent, prefilter, valid_points, Extent};
use crate::geo::validation::ensure_valid;
use crate::models::{GeoPoint, RegionQueryOptions, Shape};
use rayon::prelude::*;
use serde::Serialize;

/// Counters describing one query run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QueryStats {
    /// Entries in the input, including missing ones
    pub total: usize,
    /// Missing entries and points with invalid coordinates
    pub skipped: usize,
    /// Points that survived the extent prefilter
    pub prefiltered: usize,
    /// Points inside the shape
    pub matched: usize,
}

/// A validated shape with its resolved mode and extent, reusable across
/// point sets
#[derive(Debug, Clone)]
pub struct RegionQuery {
    shape: Shape,
    mode: ContainmentMode,
    extent: Extent,
}

impl RegionQuery {
    /// Validate `shape` and prepare it for querying.
    ///
    /// Fails with `InvalidGeometry` or `InvalidCoordinate` when the shape is
    /// malformed.
    pub fn new(shape: Shape, options: &RegionQueryOptions) -> Result<Self> {
        ensure_valid(&shape)?;

        let mode = ContainmentMode::resolve(&shape, options);
        let extent = bounding_extent(&shape, &mode);

        tracing::debug!(
            shape = shape.kind(),
            geodesic = mode.geodesic,
            sphere_radius = mode.sphere_radius_meters,
            bbox = ?extent.to_bbox(),
            crosses_antimeridian = extent.crosses_antimeridian(),
            "Prepared region query"
        );

        Ok(Self { shape, mode, extent })
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn mode(&self) -> &ContainmentMode {
        &self.mode
    }

    pub fn extent(&self) -> &Extent {
        &self.extent
    }

    /// Whether a single point is valid and inside the region
    pub fn matches(&self, point: &GeoPoint) -> bool {
        point.is_valid() && self.extent.contains(point) && self.contains_exact(point)
    }

    fn contains_exact(&self, point: &GeoPoint) -> bool {
        shape_contains(&self.shape, point, &self.mode)
    }

    /// Points inside the region, in input order
    pub fn run(&self, points: Option<&[Option<GeoPoint>]>) -> Vec<GeoPoint> {
        self.run_with_stats(points).0
    }

    /// Like [`RegionQuery::run`], also returning counters
    pub fn run_with_stats(&self, points: Option<&[Option<GeoPoint>]>) -> (Vec<GeoPoint>, QueryStats) {
        let points = points.unwrap_or_default();

        let candidates = prefilter(points, &self.extent);
        let prefiltered = candidates.len();

        let matches: Vec<GeoPoint> =
            candidates.into_iter().filter(|p| self.contains_exact(p)).collect();

        let stats = QueryStats {
            total: points.len(),
            skipped: points.len() - valid_points(points).count(),
            prefiltered,
            matched: matches.len(),
        };

        if stats.skipped > 0 {
            tracing::debug!(skipped = stats.skipped, "Skipped missing or invalid points");
        }
        tracing::debug!(
            total = stats.total,
            prefiltered = stats.prefiltered,
            matched = stats.matched,
            "Region query complete"
        );

        (matches, stats)
    }

    /// Points inside the region without the extent prefilter
    pub fn run_exact(&self, points: Option<&[Option<GeoPoint>]>) -> Vec<GeoPoint> {
        valid_points(points.unwrap_or_default()).filter(|p| self.contains_exact(p)).collect()
    }

    /// Same result as [`RegionQuery::run`], evaluated on the rayon pool
    pub fn run_par(&self, points: Option<&[Option<GeoPoint>]>) -> Vec<GeoPoint> {
        let points = points.unwrap_or_default();

        let matches: Vec<GeoPoint> = points
            .par_iter()
            .filter_map(|p| p.as_ref().copied().filter(|p| self.matches(p)))
            .collect();

        tracing::debug!(
            total = points.len(),
            matched = matches.len(),
            threads = rayon::current_num_threads(),
            "Parallel region query complete"
        );

        matches
    }
}

/// Find the points that fall inside `shape`.
///
/// Missing entries and points with invalid coordinates are skipped. The
/// result keeps input order and duplicates. A missing or empty input gives an
/// empty result; a malformed shape is an error.
pub fn find_points_in_region(
    points: Option<&[Option<GeoPoint>]>,
    shape: &Shape,
    options: &RegionQueryOptions,
) -> Result<Vec<GeoPoint>> {
    let query = RegionQuery::new(shape.clone(), options)?;
    Ok(query.run(points))
}

/// Parallel variant of [`find_points_in_region`] with identical output
pub fn find_points_in_region_par(
    points: Option<&[Option<GeoPoint>]>,
    shape: &Shape,
    options: &RegionQueryOptions,
) -> Result<Vec<GeoPoint>> {
    let query = RegionQuery::new(shape.clone(), options)?;
    Ok(query.run_par(points))
}
