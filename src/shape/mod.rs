//! Shapes supported by collide2d.

pub use self::circle::Circle;
pub use self::cuboid::Cuboid;
pub use self::polygon::{Polygon, PolygonError};
#[doc(inline)]
pub use self::shape::{Shape, ShapeType, TypedShape};

mod circle;
mod cuboid;
mod polygon;
#[doc(hidden)]
pub mod shape;
