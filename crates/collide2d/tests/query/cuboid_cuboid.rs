use collide2d::collider::Collider;
use collide2d::math::{Point, Real, Vector};
use collide2d::query::details;
use collide2d::shape::Cuboid;

fn random_cuboid(rng: &mut oorandom::Rand32) -> Collider<Cuboid> {
    let half_extents = Vector::new(
        0.1 + rng.rand_float() as Real * 2.0,
        0.1 + rng.rand_float() as Real * 2.0,
    );
    let mut collider = Collider::new(Cuboid::new(half_extents));
    collider.set_position(Point::new(
        rng.rand_float() as Real * 4.0 - 2.0,
        rng.rand_float() as Real * 4.0 - 2.0,
    ));
    collider.update();
    collider
}

#[test]
fn unrotated_fast_path_agrees_with_polygon_sat() {
    let mut rng = oorandom::Rand32::new(1234);

    for _ in 0..500 {
        let a = random_cuboid(&mut rng);
        let b = random_cuboid(&mut rng);
        assert!(a.shape().is_unrotated() && b.shape().is_unrotated());

        let fast = details::cuboid_cuboid(a.shape(), b.shape());
        let sat = details::polygon_polygon(a.shape().as_polygon(), b.shape().as_polygon());
        assert_eq!(fast.is_some(), sat.is_some());
        assert_eq!(a.overlaps(&b), Ok(fast.is_some()));
        assert_eq!(a.collides_with(&b), Ok(fast));

        if let (Some(fast), Some(sat)) = (fast, sat) {
            assert_relative_eq!(fast.depth, sat.depth, epsilon = 1.0e-4);
            assert_relative_eq!(fast.normal, sat.normal, epsilon = 1.0e-4);
        }
    }
}

#[test]
fn touching_boxes_do_not_overlap() {
    let mut a = Collider::new(Cuboid::new(Vector::new(1.0, 1.0)));
    let mut b = Collider::new(Cuboid::new(Vector::new(1.0, 1.0)));
    a.update();
    b.set_position(Point::new(2.0, 0.0));
    b.update();

    assert_eq!(a.overlaps(&b), Ok(false));
    assert_eq!(a.collides_with(&b), Ok(None));

    b.set_rotation_degrees(45.0);
    b.update();
    assert_eq!(a.overlaps(&b), Ok(true));
    let res = a.collides_with(&b).unwrap().unwrap();
    assert_relative_eq!(res.normal, Vector::new(1.0, 0.0), epsilon = 1.0e-5);
    assert_relative_eq!(res.depth, (2.0 as Real).sqrt() - 1.0, epsilon = 1.0e-5);
}
