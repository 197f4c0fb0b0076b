use crate::query::details::polygon_polygon;
use crate::shape::{Cuboid, Shape};

/// Intersection test between two boxes.
///
/// Unrotated boxes are tested through their bounds; otherwise this falls back to the
/// Separating Axis Theorem on their polygons.
#[inline]
pub fn intersection_test_cuboid_cuboid(cuboid1: &Cuboid, cuboid2: &Cuboid) -> bool {
    if cuboid1.is_unrotated() && cuboid2.is_unrotated() {
        cuboid1.bounds().intersects(cuboid2.bounds())
    } else {
        polygon_polygon(cuboid1.as_polygon(), cuboid2.as_polygon()).is_some()
    }
}
