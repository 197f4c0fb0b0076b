use collide2d::math::{Point, Real, Vector};
use collide2d::shape::Polygon;
use nalgebra::RealField;

/// A random convex polygon wound counter-clockwise, with vertices on a circle.
fn random_convex_polygon(rng: &mut oorandom::Rand32) -> Vec<Point<Real>> {
    let n = 3 + rng.rand_range(0..10) as usize;
    let radius = 0.5 + rng.rand_float() as Real * 10.0;
    let center = Vector::new(
        rng.rand_float() as Real * 20.0 - 10.0,
        rng.rand_float() as Real * 20.0 - 10.0,
    );
    let mut angles: Vec<Real> = (0..n)
        .map(|_| rng.rand_float() as Real * Real::two_pi())
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap());
    angles.dedup();

    angles
        .into_iter()
        .map(|a| Point::new(a.cos() * radius, a.sin() * radius) + center)
        .collect()
}

#[test]
fn edge_normals_are_outward_unit_perpendiculars() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..200 {
        let points = random_convex_polygon(&mut rng);
        let poly = Polygon::new(points.clone()).unwrap();
        let n = points.len();
        let centroid = Polygon::find_polygon_center(&points);

        assert_eq!(poly.edge_normals().len(), n);

        for (i, normal) in poly.edge_normals().iter().enumerate() {
            let edge = points[(i + 1) % n] - points[i];
            if edge.norm() < 1.0e-3 {
                continue;
            }

            assert_relative_eq!(normal.norm(), 1.0, epsilon = 1.0e-4);
            assert!(normal.dot(&edge).abs() < 1.0e-3 * edge.norm());
            assert!(normal.dot(&(points[i] - centroid)) >= -1.0e-4);
        }
    }
}

#[test]
fn box_flag_keeps_two_normals() {
    let points = vec![
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(4.0, 2.0),
        Point::new(0.0, 2.0),
    ];
    let poly = Polygon::with_box_flag(points.clone(), true).unwrap();
    let full = Polygon::new(points).unwrap();

    assert_eq!(poly.edge_normals(), &full.edge_normals()[..2]);
    assert_relative_eq!(full.edge_normals()[2], -full.edge_normals()[0]);
    assert_relative_eq!(full.edge_normals()[3], -full.edge_normals()[1]);
}
