//! Narrow-phase collision queries.
//!
//! # General cases
//! The most general functions provided by this module are:
//!
//! * [`query::overlaps()`](overlaps) to determine if two shapes are intersecting or not.
//! * [`query::collides()`](collides) to compute the [`CollisionResult`] of two intersecting
//!   shapes: the direction and depth of the smallest displacement separating them.
//!
//! Both work on any pair of the built-in shapes, and return [`Unsupported`] if one of them is
//! a custom shape. The same queries are available as methods of [`Shape`](crate::shape::Shape)
//! and of [`Collider`](crate::collider::Collider).
//!
//! # Specific cases
//! The functions exported by the `details` submodule are the algorithms for specific pairs
//! of shapes. For example `collision_circle_circle` computes the collision between two shapes
//! known at compile-time to be circles. They have the form `[operation]_[shape1]_[shape2]()`
//! where `[operation]` is `collision` or `intersection_test`, except for the Separating Axis
//! Theorem tests `polygon_polygon` and `cuboid_cuboid`.

pub use self::collision_result::CollisionResult;
pub use self::default_query_dispatcher::DefaultQueryDispatcher;
pub use self::error::Unsupported;
pub use self::query_dispatcher::{QueryDispatcher, QueryDispatcherChain};

use crate::shape::Shape;

mod collision;
mod collision_result;
mod default_query_dispatcher;
mod error;
mod intersection_test;
pub mod point;
mod query_dispatcher;
pub mod sat;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::collision::*;
    pub use super::intersection_test::*;
    pub use super::point::*;
    pub use super::sat::*;
}

/// Tests whether two shapes overlap.
///
/// Returns `Err(Unsupported)` if no algorithm exists for this pair of shapes.
pub fn overlaps(g1: &dyn Shape, g2: &dyn Shape) -> Result<bool, Unsupported> {
    DefaultQueryDispatcher.overlaps(g1, g2)
}

/// Computes the collision between two shapes.
///
/// The normal of the result points from `g1` toward `g2`. Returns `Ok(None)` if the shapes do
/// not intersect, and `Err(Unsupported)` if no algorithm exists for this pair of shapes.
pub fn collides(
    g1: &dyn Shape,
    g2: &dyn Shape,
) -> Result<Option<CollisionResult>, Unsupported> {
    DefaultQueryDispatcher.collides(g1, g2)
}
