pub mod options;
pub mod point;
pub mod shape;
pub mod units;

pub use options::{RegionQueryOptions, DEFAULT_POLYGON_SIDES};
pub use point::{
    GeoPoint, PlanarPoint, DEFAULT_SPHERE_RADIUS_METERS, MERCATOR_MAX_LATITUDE,
    WGS84_EQUATORIAL_RADIUS_METERS,
};
pub use shape::{Circle, Polygon, Rectangle, Shape};
pub use units::{parse_distance, parse_distance_unit, Distance, DistanceUnit};
