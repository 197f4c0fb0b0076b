//! Various unsorted geometrical operators.

pub use self::ccw_face_normal::ccw_face_normal;
pub use self::center::center;
pub use self::point_cloud_projection::point_cloud_projection;
pub use self::point_in_poly2d::point_in_poly2d;
pub use self::point_on_circle::point_on_circle;

mod ccw_face_normal;
mod center;
mod point_cloud_projection;
mod point_in_poly2d;
mod point_on_circle;
