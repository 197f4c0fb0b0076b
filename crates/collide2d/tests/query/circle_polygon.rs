use collide2d::collider::Collider;
use collide2d::math::{Point, Real, Vector};
use collide2d::query;
use collide2d::shape::{Circle, Cuboid, Polygon, Shape};

fn square_collider(x: Real, y: Real) -> Collider<Polygon> {
    let poly = Polygon::new(vec![
        Point::new(-1.0, -1.0),
        Point::new(1.0, -1.0),
        Point::new(1.0, 1.0),
        Point::new(-1.0, 1.0),
    ])
    .unwrap();
    let mut collider = Collider::new(poly);
    collider.set_position(Point::new(x, y));
    collider.update();
    collider
}

fn circle_collider(radius: Real, x: Real, y: Real) -> Collider<Circle> {
    let mut collider = Collider::new(Circle::new(radius));
    collider.set_position(Point::new(x, y));
    collider.update();
    collider
}

#[test]
fn circle_far_from_square() {
    let circle = circle_collider(1.0, 0.0, 0.0);
    let square = square_collider(3.0, 0.0);
    assert_eq!(circle.collides_with(&square), Ok(None));
    assert_eq!(square.collides_with(&circle), Ok(None));
    assert_eq!(circle.overlaps(&square), Ok(false));
}

#[test]
fn polygon_circle_is_the_inverted_circle_polygon() {
    let circle = circle_collider(1.0, 0.0, 0.25);
    let square = square_collider(1.5, 0.0);

    let cp = circle.collides_with(&square).unwrap().unwrap();
    let pc = square.collides_with(&circle).unwrap().unwrap();

    assert_relative_eq!(cp.normal, Vector::new(1.0, 0.0));
    assert_relative_eq!(cp.depth, 0.5);
    assert_relative_eq!(cp.point.unwrap(), Point::new(0.5, 0.25));
    assert_eq!(pc, cp.inverted());
}

#[test]
fn circle_center_inside_square() {
    let circle = circle_collider(0.5, 1.5, 0.0);
    let square = square_collider(1.0, 0.0);

    let res = query::collides(circle.shape(), square.shape()).unwrap().unwrap();
    assert_relative_eq!(res.normal, Vector::new(-1.0, 0.0));
    assert_relative_eq!(res.depth, 1.0);
    assert_relative_eq!(res.point.unwrap(), Point::new(2.0, 0.0));
}

#[test]
fn circle_against_box() {
    let mut cuboid = Collider::new(Cuboid::new(Vector::new(1.0, 1.0)));
    cuboid.update();

    // Close to the corner (1, 1), but outside of the circle of radius 0.5 around it.
    let circle = circle_collider(0.5, 1.4, 1.4);
    assert_eq!(circle.overlaps(&cuboid), Ok(false));
    assert_eq!(cuboid.overlaps(&circle), Ok(false));
    assert_eq!(circle.collides_with(&cuboid), Ok(None));

    let circle = circle_collider(0.5, 1.3, 1.3);
    assert_eq!(circle.overlaps(&cuboid), Ok(true));
    assert_eq!(cuboid.overlaps(&circle), Ok(true));
    let res = cuboid.collides_with(&circle).unwrap().unwrap();
    assert_relative_eq!(
        res.normal,
        Vector::new(1.0, 1.0).normalize(),
        epsilon = 1.0e-5
    );

    // Rotated boxes go through the polygon algorithm.
    cuboid.set_rotation_degrees(45.0);
    cuboid.update();
    assert_eq!(circle.overlaps(&cuboid), Ok(false));
}

#[test]
fn circles() {
    let a = circle_collider(1.0, 0.0, 0.0);
    let b = circle_collider(1.0, 1.0, 0.0);
    let res = a.collides_with(&b).unwrap().unwrap();
    assert_relative_eq!(res.normal, Vector::new(1.0, 0.0));
    assert_relative_eq!(res.depth, 1.0);
    assert_eq!(b.collides_with(&a).unwrap().unwrap().normal, -res.normal);
}

#[test]
fn points() {
    let square = square_collider(1.0, 0.0);
    let circle = circle_collider(1.0, -3.0, 0.0);

    assert!(square.shape().point_collides_with_shape(&Point::new(2.5, 0.0)).is_none());
    let res = square
        .shape()
        .point_collides_with_shape(&Point::new(1.5, 0.5))
        .unwrap();
    assert_relative_eq!(res.normal, Vector::new(-1.0, 0.0));
    assert_relative_eq!(res.depth, 0.5);

    let res = circle
        .shape()
        .point_collides_with_shape(&Point::new(-3.0, 0.5))
        .unwrap();
    assert_relative_eq!(res.normal, Vector::new(0.0, -1.0));
    assert_relative_eq!(res.depth, 0.5);
    assert!(circle.shape().contains_point(&Point::new(-2.0, 0.0)));
    assert!(circle
        .shape()
        .point_collides_with_shape(&Point::new(-2.0, 0.0))
        .is_none());
}
