extern crate nalgebra as na;

use collide2d::collider::Collider;
use collide2d::query;
use collide2d::shape::{Circle, Cuboid, Polygon};
use na::{Point2, Vector2};

fn main() {
    let hexagon = Polygon::new(Polygon::build_symmetrical_polygon(6, 1.0)).unwrap();
    let mut hexagon = Collider::new(hexagon);
    let mut cuboid = Collider::new(Cuboid::new(Vector2::new(1.0, 0.5)));
    let mut circle = Collider::new(Circle::new(0.75));

    hexagon.set_position(Point2::new(0.0, 0.0));
    cuboid.set_position(Point2::new(1.5, 0.25));
    circle.set_position(Point2::new(-1.25, 0.5));

    hexagon.update();
    cuboid.update();
    circle.update();

    let res = hexagon.collides_with(&cuboid).unwrap().unwrap();
    println!(
        "hexagon/cuboid: normal = {}, depth = {}",
        res.normal, res.depth
    );

    // Separating the hexagon from the box, with a small margin.
    hexagon.set_position(Point2::origin() - res.minimum_translation_vector - res.normal * 0.01);
    hexagon.update();
    assert!(!hexagon.overlaps(&cuboid).unwrap());

    let res = query::collides(circle.shape(), hexagon.shape())
        .unwrap()
        .unwrap();
    println!(
        "circle/hexagon: normal = {}, depth = {}, point = {:?}",
        res.normal, res.depth, res.point
    );
    assert!(res.depth > 0.0);
}
