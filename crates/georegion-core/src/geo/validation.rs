use crate::error::{GeoregionError, Result};
use crate::models::{Circle, GeoPoint, Polygon, Rectangle, Shape};

/// What kind of problem a validation error describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The shape itself is malformed (negative radius, degenerate ring)
    Geometry,
    /// A shape parameter has a non-finite or out-of-range coordinate
    Coordinate,
}

/// Validation result with details
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

/// Validation error with location details
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub location: String,
    pub reason: String,
}

impl ValidationResult {
    /// Create a valid result
    pub fn valid() -> Self {
        Self { is_valid: true, errors: Vec::new() }
    }

    /// Add an error to the result
    pub fn add_error(&mut self, kind: ValidationErrorKind, location: String, reason: String) {
        self.is_valid = false;
        self.errors.push(ValidationError { kind, location, reason });
    }

    fn check_point(&mut self, point: &GeoPoint, location: String) {
        if let Err(GeoregionError::InvalidCoordinate { reason, .. }) = point.validate(&location) {
            self.add_error(ValidationErrorKind::Coordinate, location, reason);
        }
    }
}

/// Validate a shape, collecting every problem found
pub fn validate_shape(shape: &Shape) -> ValidationResult {
    match shape {
        Shape::Circle(circle) => validate_circle(circle),
        Shape::Polygon(polygon) => validate_polygon(polygon),
        Shape::Rectangle(rect) => validate_rectangle(rect),
    }
}

fn validate_circle(circle: &Circle) -> ValidationResult {
    let mut result = ValidationResult::valid();

    result.check_point(&circle.center, "Circle center".to_string());

    if !circle.radius_meters.is_finite() || circle.radius_meters < 0.0 {
        result.add_error(
            ValidationErrorKind::Geometry,
            "Circle radius".to_string(),
            format!("Radius must be a finite, non-negative number of meters, found {}", circle.radius_meters),
        );
    }

    if !circle.sphere_radius_meters.is_finite() || circle.sphere_radius_meters <= 0.0 {
        result.add_error(
            ValidationErrorKind::Geometry,
            "Circle sphere radius".to_string(),
            format!("Sphere radius must be positive, found {}", circle.sphere_radius_meters),
        );
    }

    result
}

fn validate_polygon(polygon: &Polygon) -> ValidationResult {
    let mut result = ValidationResult::valid();

    for (i, v) in polygon.vertices.iter().enumerate() {
        result.check_point(&GeoPoint::new(v.x, v.y), format!("Polygon vertex[{}]", i));
    }

    let distinct = polygon.distinct_vertex_count();
    if distinct < 3 {
        result.add_error(
            ValidationErrorKind::Geometry,
            "Polygon ring".to_string(),
            format!("Polygon must have at least 3 distinct vertices, found {}", distinct),
        );
    }

    result
}

fn validate_rectangle(rect: &Rectangle) -> ValidationResult {
    let mut result = ValidationResult::valid();
    result.check_point(&rect.corner_a, "Rectangle corner[0]".to_string());
    result.check_point(&rect.corner_b, "Rectangle corner[1]".to_string());
    result
}

/// Fail fast on the first problem with a shape.
///
/// Geometry problems take precedence over coordinate problems, so a
/// 2-vertex polygon with a bad vertex reports `InvalidGeometry`.
pub fn ensure_valid(shape: &Shape) -> Result<()> {
    let validation = validate_shape(shape);
    if validation.is_valid {
        return Ok(());
    }

    let first = validation
        .errors
        .iter()
        .find(|e| e.kind == ValidationErrorKind::Geometry)
        .or_else(|| validation.errors.first());

    match first {
        Some(e) if e.kind == ValidationErrorKind::Geometry => {
            Err(GeoregionError::invalid_geometry(shape.kind(), e.reason.clone()))
        }
        Some(e) => Err(GeoregionError::invalid_coordinate(e.location.clone(), e.reason.clone())),
        None => Err(GeoregionError::invalid_geometry(shape.kind(), "Invalid geometry")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlanarPoint;

    #[test]
    fn test_valid_shapes() {
        assert!(validate_shape(&Shape::circle(GeoPoint::new(0.0, 0.0), 0.0)).is_valid);
        assert!(validate_shape(&Shape::rectangle(GeoPoint::new(-1.0, -1.0), GeoPoint::new(1.0, 1.0))).is_valid);
        assert!(validate_shape(&Shape::polygon(&[
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(1.0, 0.0),
            GeoPoint::new(0.0, 1.0),
        ]))
        .is_valid);
    }

    #[test]
    fn test_negative_radius_is_invalid_geometry() {
        let err = ensure_valid(&Shape::circle(GeoPoint::new(0.0, 0.0), -1.0)).unwrap_err();
        assert!(matches!(err, GeoregionError::InvalidGeometry { ref shape, .. } if shape == "circle"));
    }

    #[test]
    fn test_nan_radius_is_invalid_geometry() {
        let err = ensure_valid(&Shape::circle(GeoPoint::new(0.0, 0.0), f64::NAN)).unwrap_err();
        assert!(matches!(err, GeoregionError::InvalidGeometry { .. }));
    }

    #[test]
    fn test_bad_sphere_radius() {
        let shape = Shape::Circle(Circle::new(GeoPoint::new(0.0, 0.0), 10.0).sphere_radius(0.0));
        assert!(matches!(ensure_valid(&shape), Err(GeoregionError::InvalidGeometry { .. })));
    }

    #[test]
    fn test_two_vertex_polygon_is_degenerate() {
        let shape = Shape::polygon(&[GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)]);
        let err = ensure_valid(&shape).unwrap_err();
        assert!(matches!(err, GeoregionError::InvalidGeometry { ref shape, .. } if shape == "polygon"));
    }

    #[test]
    fn test_closed_triangle_with_repeated_vertex_is_degenerate() {
        // Closing vertex plus a duplicate leaves two distinct points
        let shape = Shape::Polygon(Polygon::new(vec![
            PlanarPoint::new(0.0, 0.0),
            PlanarPoint::new(1.0, 1.0),
            PlanarPoint::new(1.0, 1.0),
            PlanarPoint::new(0.0, 0.0),
        ]));
        assert!(matches!(ensure_valid(&shape), Err(GeoregionError::InvalidGeometry { .. })));
    }

    #[test]
    fn test_out_of_range_center_is_invalid_coordinate() {
        let err = ensure_valid(&Shape::circle(GeoPoint::new(0.0, 91.0), 10.0)).unwrap_err();
        match err {
            GeoregionError::InvalidCoordinate { location, .. } => assert_eq!(location, "Circle center"),
            other => panic!("Expected InvalidCoordinate, got {:?}", other),
        }
    }

    #[test]
    fn test_geometry_error_wins_over_coordinate_error() {
        let shape = Shape::polygon(&[GeoPoint::new(f64::NAN, 0.0), GeoPoint::new(1.0, 1.0)]);
        let result = validate_shape(&shape);
        assert_eq!(result.errors.len(), 2);
        assert!(matches!(ensure_valid(&shape), Err(GeoregionError::InvalidGeometry { .. })));
    }

    #[test]
    fn test_rectangle_corner_validation() {
        let shape = Shape::rectangle(GeoPoint::new(0.0, 0.0), GeoPoint::new(f64::INFINITY, 1.0));
        match ensure_valid(&shape).unwrap_err() {
            GeoregionError::InvalidCoordinate { location, .. } => {
                assert_eq!(location, "Rectangle corner[1]")
            }
            other => panic!("Expected InvalidCoordinate, got {:?}", other),
        }
    }
}
