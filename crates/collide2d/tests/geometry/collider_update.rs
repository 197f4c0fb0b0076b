use collide2d::collider::{Collider, ColliderContext, Transform};
use collide2d::math::{Point, Real, Rotation, Vector};
use collide2d::shape::{Cuboid, Polygon, Shape};
use nalgebra::RealField;

fn square() -> Polygon {
    Polygon::new(vec![
        Point::new(-1.0, -1.0),
        Point::new(1.0, -1.0),
        Point::new(1.0, 1.0),
        Point::new(-1.0, 1.0),
    ])
    .unwrap()
}

#[test]
fn recalculate_bounds_is_idempotent() {
    let mut poly = square();
    let mut ctx = ColliderContext::new(Vector::new(0.5, -0.25))
        .with_transform(Transform::translation(3.0, 4.0));
    ctx.transform.rotation = 0.7;
    ctx.transform.scale = Vector::new(2.0, 0.5);
    ctx.rotation_dirty = true;

    poly.recalculate_bounds(&ctx);
    let points = poly.points().to_vec();
    let normals = poly.edge_normals().to_vec();
    let bounds = *poly.bounds();
    let position = poly.position();

    ctx.rotation_dirty = false;
    poly.recalculate_bounds(&ctx);

    assert_eq!(poly.points(), &points[..]);
    assert_eq!(poly.edge_normals(), &normals[..]);
    assert_eq!(*poly.bounds(), bounds);
    assert_eq!(poly.position(), position);
}

#[test]
fn rotating_the_collider_rotates_the_edge_normals() {
    let mut collider = Collider::new(square());
    collider.update();
    let before = collider.shape().edge_normals().to_vec();

    let angle = Real::frac_pi_4();
    collider.set_rotation(angle);
    collider.update();

    let rot = Rotation::new(angle);
    for (rotated, original) in collider.shape().edge_normals().iter().zip(before.iter()) {
        assert_relative_eq!(*rotated, rot * *original, epsilon = 1.0e-5);
    }

    // The rotation is applied around the centroid, from the original points.
    collider.set_rotation(0.0);
    collider.update();
    for (pt, original) in collider
        .shape()
        .points()
        .iter()
        .zip(collider.shape().original_points())
    {
        assert_relative_eq!(*pt, *original, epsilon = 1.0e-5);
    }
}

#[test]
fn bounds_follow_the_transform() {
    let mut collider = Collider::new(Cuboid::new(Vector::new(2.0, 1.0)));
    collider.set_position(Point::new(10.0, 0.0));
    collider.set_rotation_degrees(90.0);
    collider.update();

    let bounds = collider.shape().bounds();
    assert_relative_eq!(bounds.mins, Point::new(9.0, -2.0), epsilon = 1.0e-5);
    assert_relative_eq!(bounds.maxs, Point::new(11.0, 2.0), epsilon = 1.0e-5);
    assert!(!collider.shape().is_unrotated());

    assert!(collider.shape().contains_point(&Point::new(10.5, 1.5)));
    assert!(!collider.shape().contains_point(&Point::new(11.5, 0.5)));
}

#[test]
fn shape_can_ignore_scale_and_rotation() {
    let mut collider = Collider::new(square());
    collider.set_scale_and_rotate_with_transform(false);
    collider.set_scale(Vector::new(3.0, 3.0));
    collider.set_rotation(1.0);
    collider.set_position(Point::new(-2.0, 2.0));
    collider.update();

    assert_eq!(collider.shape().points(), collider.shape().original_points());
    assert_eq!(collider.shape().bounds().mins, Point::new(-3.0, 1.0));
    assert_eq!(collider.shape().bounds().maxs, Point::new(-1.0, 3.0));
}
