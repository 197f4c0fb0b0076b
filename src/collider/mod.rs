//! The collider side of the shapes: the transform they follow and the context handed to
//! [`Shape::recalculate_bounds`](crate::shape::Shape::recalculate_bounds).

pub use self::collider::Collider;
pub use self::collider_context::ColliderContext;
pub use self::transform::Transform;

mod collider;
mod collider_context;
mod transform;
