use crate::math::Vector;
use crate::query::CollisionResult;
use crate::shape::{Circle, Shape};
use na::ComplexField;
use num::Zero;

/// Collision between two circles.
///
/// The circles collide if the distance between their centers is strictly smaller than the sum
/// of their radii. The normal points from the center of `circle1` toward the center of
/// `circle2` (the `x` axis if both centers coincide) and the contact point lies on the boundary
/// of `circle2`.
#[inline]
pub fn collision_circle_circle(circle1: &Circle, circle2: &Circle) -> Option<CollisionResult> {
    let r1 = circle1.radius();
    let r2 = circle2.radius();
    let center12 = circle2.position() - circle1.position();
    let distance_squared = center12.norm_squared();
    let sum_radius = r1 + r2;

    if distance_squared < sum_radius * sum_radius {
        let distance = ComplexField::sqrt(distance_squared);
        let normal = if !distance_squared.is_zero() {
            center12 / distance
        } else {
            Vector::x()
        };
        let point = circle2.position() - normal * r2;

        Some(CollisionResult::new(
            normal,
            sum_radius - distance,
            Some(point),
        ))
    } else {
        None
    }
}
