//! Property tests for distance, containment and the extent prefilter

use geo::{Contains, Intersects};
use georegion_core::geo::{circle_contains_geodesic, destination, haversine_distance, polygon_contains};
use georegion_core::models::{Circle, PlanarPoint, Polygon, DEFAULT_SPHERE_RADIUS_METERS};
use georegion_core::{GeoPoint, RegionQuery, RegionQueryOptions, Shape};
use proptest::prelude::*;

fn geo_point() -> impl Strategy<Value = GeoPoint> {
    (-180.0..=180.0f64, -90.0..=90.0f64).prop_map(|(lon, lat)| GeoPoint::new(lon, lat))
}

fn sphere_radius() -> impl Strategy<Value = f64> {
    1.0..10_000_000.0f64
}

/// Points scattered within `spread` degrees of `center`, wrapped into range
fn points_near(center: GeoPoint, spread: f64, len: usize) -> impl Strategy<Value = Vec<Option<GeoPoint>>> {
    prop::collection::vec(
        prop::option::weighted(0.9, (-spread..=spread, -spread..=spread)),
        0..len,
    )
    .prop_map(move |offsets| {
        offsets
            .into_iter()
            .map(|offset| {
                offset.map(|(dlon, dlat)| {
                    let mut lon = center.longitude + dlon;
                    if lon > 180.0 {
                        lon -= 360.0;
                    } else if lon < -180.0 {
                        lon += 360.0;
                    }
                    GeoPoint::new(lon, (center.latitude + dlat).clamp(-90.0, 90.0))
                })
            })
            .collect()
    })
}

/// Points on and just around a circle's rim
fn rim_points(circle: &Circle) -> Vec<Option<GeoPoint>> {
    (0..72)
        .flat_map(|i| {
            let bearing = f64::from(i) * 5.0;
            [0.999_999, 1.0, 1.000_001].map(|k| {
                Some(destination(
                    &circle.center,
                    bearing,
                    circle.radius_meters * k,
                    circle.sphere_radius_meters,
                ))
            })
        })
        .collect()
}

/// Star-shaped (and therefore simple) polygon around a center
fn star_polygon() -> impl Strategy<Value = Polygon> {
    (
        -150.0..150.0f64,
        -60.0..60.0f64,
        prop::collection::vec(0.5..20.0f64, 3..12),
    )
        .prop_map(|(cx, cy, radii)| {
            let n = radii.len() as f64;
            let vertices = radii
                .iter()
                .enumerate()
                .map(|(i, r)| {
                    let angle = 2.0 * std::f64::consts::PI * i as f64 / n;
                    PlanarPoint::new(cx + r * angle.cos(), cy + r * angle.sin())
                })
                .collect();
            Polygon::new(vertices)
        })
}

proptest! {
    #[test]
    fn prop_distance_to_self_is_zero(a in geo_point(), r in sphere_radius()) {
        prop_assert_eq!(haversine_distance(&a, &a, r), 0.0);
    }

    #[test]
    fn prop_distance_is_symmetric(a in geo_point(), b in geo_point(), r in sphere_radius()) {
        let ab = haversine_distance(&a, &b, r);
        let ba = haversine_distance(&b, &a, r);
        prop_assert!((ab - ba).abs() <= 1e-9 * ab.max(1.0), "{} vs {}", ab, ba);
    }

    #[test]
    fn prop_distance_scales_with_radius(a in geo_point(), b in geo_point(), r in sphere_radius()) {
        let scaled = haversine_distance(&a, &b, 1.0) * r;
        let direct = haversine_distance(&a, &b, r);
        prop_assert!((scaled - direct).abs() <= 1e-9 * direct.max(1.0));
    }

    #[test]
    fn prop_distance_never_exceeds_half_circumference(a in geo_point(), b in geo_point()) {
        let d = haversine_distance(&a, &b, 1.0);
        prop_assert!((0.0..=std::f64::consts::PI + 1e-12).contains(&d));
    }

    #[test]
    fn prop_center_is_always_contained(c in geo_point(), radius in 0.0..20_000_000.0f64) {
        prop_assert!(circle_contains_geodesic(&c, &Circle::new(c, radius)));
    }

    #[test]
    fn prop_containment_is_monotonic_in_radius(
        c in geo_point(),
        bearing in 0.0..360.0f64,
        frac in prop_oneof![Just(1.0), 0.0..=1.0f64],
        r1 in 0.0..10_000_000.0f64,
        extra in 0.0..10_000_000.0f64,
    ) {
        // Inside or on the rim of the small circle by construction; near the
        // poles asin rounding can move p by a few centimetres
        let p = destination(&c, bearing, frac * r1, DEFAULT_SPHERE_RADIUS_METERS);
        let small = Circle::new(c, r1 + 1.0);
        let large = Circle::new(c, r1 + 1.0 + extra);

        prop_assert!(circle_contains_geodesic(&p, &small), "{:?} outside {:?}", p, small);
        prop_assert!(circle_contains_geodesic(&p, &large), "{:?} outside {:?}", p, large);
    }

    #[test]
    fn prop_prefilter_never_drops_circle_matches(
        (center, points) in geo_point().prop_flat_map(|c| (Just(c), points_near(c, 40.0, 200))),
        radius in 0.0..3_000_000.0f64,
        geodesic in any::<bool>(),
    ) {
        let circle = Circle::new(center, radius);
        let mut all = points;
        if geodesic {
            all.extend(rim_points(&circle));
        }

        let options = RegionQueryOptions::new().geodesic(geodesic);
        let query = RegionQuery::new(circle.into(), &options).unwrap();

        prop_assert_eq!(query.run(Some(all.as_slice())), query.run_exact(Some(all.as_slice())));
    }

    #[test]
    fn prop_prefilter_never_drops_polygon_matches(
        polygon in star_polygon(),
        points in points_near(GeoPoint::new(0.0, 0.0), 180.0, 300),
    ) {
        let query = RegionQuery::new(Shape::Polygon(polygon.clone()), &RegionQueryOptions::new()).unwrap();

        // Vertices sit exactly on the extent's edge
        let mut all = points;
        all.extend(polygon.vertices.iter().map(|v| Some(GeoPoint::new(v.x, v.y))));

        prop_assert_eq!(query.run(Some(all.as_slice())), query.run_exact(Some(all.as_slice())));
    }

    #[test]
    fn prop_prefilter_never_drops_rectangle_matches(
        a in geo_point(),
        b in geo_point(),
        points in points_near(GeoPoint::new(0.0, 0.0), 180.0, 300),
    ) {
        let shape = Shape::rectangle(a, b);
        let query = RegionQuery::new(shape, &RegionQueryOptions::new()).unwrap();

        let mut all = points;
        all.push(Some(a));
        all.push(Some(b));

        prop_assert_eq!(query.run(Some(all.as_slice())), query.run_exact(Some(all.as_slice())));
    }

    #[test]
    fn prop_parallel_equals_sequential(
        (center, points) in geo_point().prop_flat_map(|c| (Just(c), points_near(c, 10.0, 400))),
        radius in 0.0..1_000_000.0f64,
    ) {
        let query = RegionQuery::new(Shape::circle(center, radius), &RegionQueryOptions::new()).unwrap();
        prop_assert_eq!(query.run(Some(points.as_slice())), query.run_par(Some(points.as_slice())));
    }

    #[test]
    fn prop_polygon_interior_agrees_with_geo(
        polygon in star_polygon(),
        x in -180.0..180.0f64,
        y in -90.0..90.0f64,
    ) {
        let geo_polygon = polygon.to_geo();
        let point = geo::Point::new(x, y);
        prop_assume!(!geo_polygon.exterior().intersects(&point));

        prop_assert_eq!(
            polygon_contains(&PlanarPoint::new(x, y), &polygon),
            geo_polygon.contains(&point)
        );
    }

    #[test]
    fn prop_polygon_vertices_are_contained(polygon in star_polygon()) {
        for v in &polygon.vertices {
            prop_assert!(polygon_contains(v, &polygon));
        }
    }
}
