use collide2d::collider::Collider;
use collide2d::math::{Point, Vector};
use collide2d::shape::{Cuboid, Polygon, Shape};

#[test]
fn polygon_and_box_containment_agree() {
    let square = Polygon::new(vec![
        Point::new(-1.0, -1.0),
        Point::new(1.0, -1.0),
        Point::new(1.0, 1.0),
        Point::new(-1.0, 1.0),
    ])
    .unwrap();
    let mut polygon = Collider::new(square);
    let mut cuboid = Collider::new(Cuboid::new(Vector::new(1.0, 1.0)));
    polygon.set_position(Point::new(5.0, 5.0));
    cuboid.set_position(Point::new(5.0, 5.0));
    polygon.update();
    cuboid.update();

    let cases = [
        (Point::new(5.0, 5.0), true),
        (Point::new(7.0, 7.0), false),
        (Point::new(5.5, 4.5), true),
        (Point::new(5.0, 6.5), false),
        // Half-open boundary: min corner inside, max corner outside.
        (Point::new(4.0, 4.0), true),
        (Point::new(6.0, 6.0), false),
    ];

    for (pt, expected) in cases {
        assert_eq!(polygon.shape().contains_point(&pt), expected, "{}", pt);
        assert_eq!(cuboid.shape().contains_point(&pt), expected, "{}", pt);
    }
}
