use crate::math::{Point, Real, Vector};
use crate::query::CollisionResult;
use crate::shape::{Circle, Shape};
use na::ComplexField;
use num::Zero;

/// Collision between a point and a circle.
///
/// The point collides if it is strictly closer to the center than the radius. The normal
/// points from `point` toward the circle center (the `x` axis if they coincide), the depth is
/// the distance from the point to the circle boundary, and the contact point is the point of
/// the boundary closest to `point`.
#[inline]
pub fn collision_point_circle(point: &Point<Real>, circle: &Circle) -> Option<CollisionResult> {
    let radius = circle.radius();
    let to_center = circle.position() - point;
    let distance_squared = to_center.norm_squared();

    if distance_squared < radius * radius {
        let distance = ComplexField::sqrt(distance_squared);
        let normal = if !distance_squared.is_zero() {
            to_center / distance
        } else {
            Vector::x()
        };

        Some(CollisionResult::new(
            normal,
            radius - distance,
            Some(circle.position() - normal * radius),
        ))
    } else {
        None
    }
}
