use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::{Circle, Shape};

/// Intersection test between an axis-aligned rectangle and a disk.
///
/// The disk intersects the rectangle if its center is inside of the rectangle, or if the point
/// of the rectangle closest to the center is strictly closer than `radius`.
#[inline]
pub fn intersection_test_aabb_disk(aabb: &Aabb, center: &Point<Real>, radius: Real) -> bool {
    if aabb.contains_local_point(center) {
        return true;
    }

    let closest = aabb.closest_point(center);
    na::distance_squared(&closest, center) < radius * radius
}

/// Intersection test between an axis-aligned rectangle and a circle.
#[inline]
pub fn intersection_test_aabb_circle(aabb: &Aabb, circle: &Circle) -> bool {
    intersection_test_aabb_disk(aabb, &circle.position(), circle.radius())
}

/// Intersection test between a circle and an axis-aligned rectangle.
#[inline]
pub fn intersection_test_circle_aabb(circle: &Circle, aabb: &Aabb) -> bool {
    intersection_test_aabb_circle(aabb, circle)
}
