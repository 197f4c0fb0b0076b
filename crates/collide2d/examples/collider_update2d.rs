extern crate nalgebra as na;

use collide2d::collider::Collider;
use collide2d::shape::{Polygon, Shape};
use na::{Point2, Vector2};

fn main() {
    let triangle = Polygon::new(vec![
        Point2::new(0.0, 0.0),
        Point2::new(2.0, 0.0),
        Point2::new(0.0, 2.0),
    ])
    .unwrap();
    let mut collider = Collider::new(triangle);
    collider.set_local_offset(Vector2::new(1.0, 0.0));

    for step in 0..4 {
        collider.set_position(Point2::new(step as f32, 0.0));
        collider.set_rotation_degrees(step as f32 * 30.0);
        collider.set_scale(Vector2::repeat(1.0 + step as f32 * 0.5));
        collider.update();

        let shape = collider.shape();
        println!(
            "step {}: position = {}, bounds = [{}, {}]",
            step,
            shape.position(),
            shape.bounds().mins,
            shape.bounds().maxs
        );
        for (i, normal) in shape.edge_normals().iter().enumerate() {
            println!("    edge normal {}: {}", i, normal);
        }
    }
}
