//! Boolean overlap tests that are cheaper than computing a full collision.

pub use self::intersection_test_aabb_circle::{
    intersection_test_aabb_circle, intersection_test_aabb_disk, intersection_test_circle_aabb,
};
pub use self::intersection_test_cuboid_cuboid::intersection_test_cuboid_cuboid;

mod intersection_test_aabb_circle;
mod intersection_test_cuboid_cuboid;
