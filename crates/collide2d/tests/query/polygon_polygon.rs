use collide2d::collider::Collider;
use collide2d::math::{Point, Real, Vector};
use collide2d::query;
use collide2d::shape::Polygon;

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

fn random_collider(rng: &mut oorandom::Rand32) -> Collider<Polygon> {
    let n = 3 + rng.rand_range(0..6) as usize;
    let radius = 0.5 + rng.rand_float() as Real * 2.0;
    let points = Polygon::build_symmetrical_polygon(n, radius);
    let mut collider = Collider::new(Polygon::new(points).unwrap());
    collider.set_position(Point::new(
        rng.rand_float() as Real * 6.0 - 3.0,
        rng.rand_float() as Real * 6.0 - 3.0,
    ));
    collider.set_rotation(rng.rand_float() as Real * 6.0);
    collider.set_scale(Vector::new(
        0.5 + rng.rand_float() as Real,
        0.5 + rng.rand_float() as Real,
    ));
    collider.update();
    collider
}

#[test]
fn squares_overlapping_along_x() {
    let a = square_collider(0.0, 0.0);
    let b = square_collider(1.5, 0.0);

    let res = a.collides_with(&b).unwrap().unwrap();
    assert_relative_eq!(res.depth, 0.5);
    assert_relative_eq!(res.normal, Vector::new(1.0, 0.0));
    assert_relative_eq!(res.minimum_translation_vector, Vector::new(0.5, 0.0));
    assert!(res.point.is_none());

    let res = b.collides_with(&a).unwrap().unwrap();
    assert_relative_eq!(res.depth, 0.5);
    assert_relative_eq!(res.normal, Vector::new(-1.0, 0.0));
}

#[test]
fn squares_far_apart() {
    let a = square_collider(0.0, 0.0);
    let b = square_collider(0.0, 10.0);
    assert_eq!(a.collides_with(&b), Ok(None));
    assert_eq!(a.overlaps(&b), Ok(false));
}

#[test]
fn random_pairs_are_symmetric_and_separable() {
    let mut rng = oorandom::Rand32::new(7);
    let mut num_collisions = 0;

    for _ in 0..500 {
        let mut a = random_collider(&mut rng);
        let b = random_collider(&mut rng);

        let ab = query::collides(a.shape(), b.shape()).unwrap();
        let ba = query::collides(b.shape(), a.shape()).unwrap();
        assert_eq!(ab.is_some(), ba.is_some());
        assert_eq!(a.overlaps(&b), Ok(ab.is_some()));

        let Some(ab) = ab else { continue };
        let ba = ba.unwrap();
        num_collisions += 1;

        assert!(ab.depth > 0.0);
        assert_relative_eq!(ab.depth, ba.depth, epsilon = 1.0e-4);
        assert_relative_eq!(ab.normal.norm(), 1.0, epsilon = 1.0e-4);

        // Moving `a` by `-mtv`, plus a small margin, separates both polygons.
        let position =
            a.transform().position - ab.minimum_translation_vector - ab.normal * 1.0e-2;
        a.set_position(position);
        a.update();
        assert_eq!(a.collides_with(&b), Ok(None));
    }

    assert!(num_collisions > 50);
}
