//! Collision queries computing a [`CollisionResult`](crate::query::CollisionResult) between
//! pairs of shapes involving circles or points.

pub use self::collision_circle_circle::collision_circle_circle;
pub use self::collision_circle_polygon::{
    collision_circle_polygon, collision_disk_polygon, collision_point_polygon,
    collision_polygon_circle,
};
pub use self::collision_point_circle::collision_point_circle;

mod collision_circle_circle;
mod collision_circle_polygon;
mod collision_point_circle;
