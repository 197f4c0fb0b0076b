//! Closest points between a point and polygonal boundaries.

pub use self::point_polygon::{closest_point_on_polygon_to_point, ClosestPointOnPolygon};
pub use self::point_segment::closest_point_on_line;

mod point_polygon;
mod point_segment;
