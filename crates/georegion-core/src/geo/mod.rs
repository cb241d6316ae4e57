//! Geo module for spatial operations
//!
//! This module provides distance, containment, extent prefiltering and shape
//! validation.

pub mod containment;
pub mod distance;
pub mod extent;
pub mod validation;

// Re-export key types for convenience
pub use containment::{
    circle_contains_geodesic, circle_contains_planar, polygon_contains, rectangle_contains,
    shape_contains, ContainmentMode,
};
pub use distance::{angular_distance, destination, haversine_distance};
pub use extent::{bounding_extent, prefilter, valid_points, Extent};
pub use validation::{ensure_valid, validate_shape, ValidationError, ValidationResult};
