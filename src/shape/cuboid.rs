//! Box shape.

use crate::bounding_volume::Aabb;
use crate::collider::ColliderContext;
use crate::math::{Point, Real, Vector};
use crate::query::CollisionResult;
use crate::shape::{Polygon, Shape, ShapeType, TypedShape};
use alloc::vec::Vec;

/// A box, i.e., a rectangle described by its half extents.
///
/// A cuboid is a [`Polygon`] flagged as a box, so it only has two edge normals. While its
/// collider is unrotated, several queries use its axis-aligned bounds directly instead of the
/// polygon algorithms.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct Cuboid {
    polygon: Polygon,
    half_extents: Vector<Real>,
}

impl Cuboid {
    /// Creates a new box from its half-extents. Half-extents are the box half-width along
    /// each axis. Each half-extent must be finite; its sign is ignored.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        let half_extents = half_extents.abs();
        debug_assert!(
            half_extents.iter().all(|e| e.is_finite()),
            "the half-extents of a cuboid must be finite"
        );
        Cuboid {
            polygon: Polygon::from_points_unchecked(Self::build_box(&half_extents), true),
            half_extents,
        }
    }

    /// The vertices of a box centered at the origin, wound counter-clockwise.
    pub fn build_box(half_extents: &Vector<Real>) -> Vec<Point<Real>> {
        let (hx, hy) = (half_extents.x, half_extents.y);
        vec![
            Point::new(-hx, -hy),
            Point::new(hx, -hy),
            Point::new(hx, hy),
            Point::new(-hx, hy),
        ]
    }

    /// The half-extents given to [`Cuboid::new`] or [`Cuboid::set_half_extents`].
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        self.half_extents
    }

    /// Resizes this box. The sign of each half-extent is ignored.
    ///
    /// Like [`Polygon::set_points`], the scale and rotation of the owning transform are only
    /// applied again by the next [`Shape::recalculate_bounds`].
    pub fn set_half_extents(&mut self, half_extents: Vector<Real>) {
        let half_extents = half_extents.abs();
        self.half_extents = half_extents;
        self.polygon
            .replace_points_unchecked(Self::build_box(&half_extents));
    }

    /// The polygon describing this box.
    #[inline]
    pub fn as_polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Was the rotation of the owning transform exactly zero at the last recompute?
    #[inline]
    pub fn is_unrotated(&self) -> bool {
        self.polygon.is_unrotated()
    }
}

impl Shape for Cuboid {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Cuboid
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Cuboid(self)
    }

    #[inline]
    fn position(&self) -> Point<Real> {
        self.polygon.position()
    }

    #[inline]
    fn center(&self) -> Vector<Real> {
        self.polygon.center()
    }

    #[inline]
    fn bounds(&self) -> &Aabb {
        self.polygon.bounds()
    }

    fn recalculate_bounds(&mut self, collider: &ColliderContext) {
        self.polygon.recalculate_bounds(collider)
    }

    /// While unrotated, the test is done against the bounds with the same half-open convention
    /// as the polygon test.
    fn contains_point(&self, point: &Point<Real>) -> bool {
        if self.is_unrotated() {
            self.bounds().contains_local_point(point)
        } else {
            self.polygon.contains_point(point)
        }
    }

    fn point_collides_with_shape(&self, point: &Point<Real>) -> Option<CollisionResult> {
        self.polygon.point_collides_with_shape(point)
    }
}
