use collide2d::math::{Point, Real, Vector};
use collide2d::shape::{Polygon, Shape};

#[test]
fn hexagon() {
    let points = Polygon::build_symmetrical_polygon(6, 1.0);
    let half_sqrt3 = (3.0 as Real).sqrt() / 2.0;

    assert_eq!(points.len(), 6);
    assert_relative_eq!(points[0], Point::new(1.0, 0.0), epsilon = 1.0e-5);
    assert_relative_eq!(points[1], Point::new(0.5, half_sqrt3), epsilon = 1.0e-5);
    assert_relative_eq!(points[3], Point::new(-1.0, 0.0), epsilon = 1.0e-5);

    let poly = Polygon::new(points).unwrap();
    assert_eq!(poly.edge_normals().len(), 6);
    assert_relative_eq!(
        poly.edge_normals()[0],
        Vector::new(half_sqrt3, 0.5),
        epsilon = 1.0e-5
    );
    assert_relative_eq!(poly.polygon_center(), Point::origin(), epsilon = 1.0e-5);
    assert!(poly.contains_point(&Point::new(0.5, 0.5)));
    assert!(!poly.contains_point(&Point::new(0.9, 0.9)));
}

#[test]
fn large_polygon_approaches_its_circle() {
    let points = Polygon::build_symmetrical_polygon(64, 3.0);
    let poly = Polygon::new(points).unwrap();
    let bounds = poly.bounds();

    assert_relative_eq!(bounds.mins, Point::new(-3.0, -3.0), epsilon = 1.0e-2);
    assert_relative_eq!(bounds.maxs, Point::new(3.0, 3.0), epsilon = 1.0e-2);
}
