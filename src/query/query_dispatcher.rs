//! Dispatch of the collision queries on the actual types of the shapes involved.
//!
//! The free functions [`query::overlaps`](crate::query::overlaps) and
//! [`query::collides`](crate::query::collides), as well as the default methods of
//! [`Shape`], use the [`DefaultQueryDispatcher`](crate::query::DefaultQueryDispatcher) which
//! knows about the polygons, boxes, and circles of this crate. Queries involving any other
//! shape fail with [`Unsupported`].
//!
//! A custom shape can take part in collisions by providing its own dispatcher for the pairs it
//! supports, and chaining it with the default one:
//!
//! ```
//! # #[cfg(feature = "f32")] {
//! use collide2d::bounding_volume::Aabb;
//! use collide2d::collider::ColliderContext;
//! use collide2d::math::{Point, Real, Vector};
//! use collide2d::query::{CollisionResult, DefaultQueryDispatcher, QueryDispatcher, Unsupported};
//! use collide2d::shape::{Circle, Shape, ShapeType, TypedShape};
//!
//! /// Overlaps everything, everywhere.
//! struct Everywhere(Aabb);
//!
//! impl Shape for Everywhere {
//!     fn shape_type(&self) -> ShapeType { ShapeType::Custom }
//!     fn as_typed_shape(&self) -> TypedShape<'_> { TypedShape::Custom(self) }
//!     fn position(&self) -> Point<Real> { Point::origin() }
//!     fn center(&self) -> Vector<Real> { Vector::zeros() }
//!     fn bounds(&self) -> &Aabb { &self.0 }
//!     fn recalculate_bounds(&mut self, _: &ColliderContext) {}
//!     fn contains_point(&self, _: &Point<Real>) -> bool { true }
//!     fn point_collides_with_shape(&self, _: &Point<Real>) -> Option<CollisionResult> { None }
//! }
//!
//! struct EverywhereDispatcher;
//!
//! impl QueryDispatcher for EverywhereDispatcher {
//!     fn overlaps(&self, g1: &dyn Shape, g2: &dyn Shape) -> Result<bool, Unsupported> {
//!         if g1.is::<Everywhere>() || g2.is::<Everywhere>() {
//!             Ok(true)
//!         } else {
//!             Err(Unsupported::new(g1.shape_type(), g2.shape_type()))
//!         }
//!     }
//!
//!     fn collides(
//!         &self,
//!         g1: &dyn Shape,
//!         g2: &dyn Shape,
//!     ) -> Result<Option<CollisionResult>, Unsupported> {
//!         Err(Unsupported::new(g1.shape_type(), g2.shape_type()))
//!     }
//! }
//!
//! let everywhere = Everywhere(Aabb::new_invalid());
//! let circle = Circle::new(1.0);
//!
//! assert!(DefaultQueryDispatcher.overlaps(&everywhere, &circle).is_err());
//!
//! let dispatcher = EverywhereDispatcher.chain(DefaultQueryDispatcher);
//! assert_eq!(dispatcher.overlaps(&everywhere, &circle), Ok(true));
//! assert_eq!(dispatcher.overlaps(&circle, &circle), Ok(true));
//! # }
//! ```

use crate::query::{CollisionResult, Unsupported};
use crate::shape::Shape;

/// Dispatcher for the collision queries between pairs of shapes.
///
/// Each method returns `Err(Unsupported)` if the dispatcher does not know how to handle the
/// given pair of shapes. Results are always expressed from the perspective of `g1`: the normal
/// of a [`CollisionResult`] points from `g1` toward `g2`.
pub trait QueryDispatcher: Send + Sync {
    /// Tests whether two shapes overlap.
    ///
    /// This may be cheaper than [`QueryDispatcher::collides`] when the dispatcher has a
    /// dedicated boolean test for the pair.
    fn overlaps(&self, g1: &dyn Shape, g2: &dyn Shape) -> Result<bool, Unsupported>;

    /// Computes the collision between two shapes.
    ///
    /// Returns `Ok(None)` if the shapes do not collide.
    fn collides(
        &self,
        g1: &dyn Shape,
        g2: &dyn Shape,
    ) -> Result<Option<CollisionResult>, Unsupported>;

    /// Construct a `QueryDispatcher` that falls back on `other` for cases not handled by `self`.
    fn chain<U: QueryDispatcher>(self, other: U) -> QueryDispatcherChain<Self, U>
    where
        Self: Sized,
    {
        QueryDispatcherChain(self, other)
    }
}

/// A chain of two query dispatchers: the second one is only asked if the first one returns
/// [`Unsupported`].
///
/// This is created by [`QueryDispatcher::chain`].
pub struct QueryDispatcherChain<T, U>(T, U);

macro_rules! chain_method {
    ($name:ident ( $( $arg:ident : $ty:ty,)*) -> $result:ty) => {
        fn $name(&self, $($arg : $ty,)*
        ) -> Result<$result, Unsupported> {
            (self.0).$name($($arg,)*)
                .or_else(|_| (self.1).$name($($arg,)*))
        }
    }
}

impl<T, U> QueryDispatcher for QueryDispatcherChain<T, U>
where
    T: QueryDispatcher,
    U: QueryDispatcher,
{
    chain_method!(overlaps(g1: &dyn Shape, g2: &dyn Shape,) -> bool);

    chain_method!(collides(g1: &dyn Shape, g2: &dyn Shape,) -> Option<CollisionResult>);
}
