use crate::bounding_volume::Aabb;
use crate::collider::ColliderContext;
use crate::math::{Point, Real, Vector};
use crate::query::{CollisionResult, DefaultQueryDispatcher, Unsupported};
use crate::shape::{Circle, Cuboid, Polygon};
use core::fmt;
use downcast_rs::{impl_downcast, DowncastSync};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// Enum representing the type of a shape.
pub enum ShapeType {
    /// A convex polygon.
    Polygon = 0,
    /// A circle.
    Circle,
    /// A box, i.e., a polygon with four vertices and two distinct edge normals.
    Cuboid,
    /// A custom user-defined shape.
    Custom,
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeType::Polygon => "polygon",
            ShapeType::Circle => "circle",
            ShapeType::Cuboid => "cuboid",
            ShapeType::Custom => "custom shape",
        };
        f.pad(name)
    }
}

#[derive(Copy, Clone)]
/// Enum representing the shape with its actual type.
///
/// This is the closed set of shapes the [`DefaultQueryDispatcher`] knows about. Any other
/// shape reports itself as [`TypedShape::Custom`], for which no collision algorithm exists.
pub enum TypedShape<'a> {
    /// A convex polygon.
    Polygon(&'a Polygon),
    /// A circle.
    Circle(&'a Circle),
    /// A box.
    Cuboid(&'a Cuboid),
    /// A custom user-defined shape.
    Custom(&'a dyn Shape),
}

impl<'a> TypedShape<'a> {
    /// The type tag of this shape.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            TypedShape::Polygon(_) => ShapeType::Polygon,
            TypedShape::Circle(_) => ShapeType::Circle,
            TypedShape::Cuboid(_) => ShapeType::Cuboid,
            TypedShape::Custom(_) => ShapeType::Custom,
        }
    }

    /// The polygonal geometry of this shape, if it has one.
    ///
    /// Boxes are polygons, so both [`TypedShape::Polygon`] and [`TypedShape::Cuboid`] return
    /// `Some`.
    pub fn as_polygon(&self) -> Option<&'a Polygon> {
        match *self {
            TypedShape::Polygon(p) => Some(p),
            TypedShape::Cuboid(c) => Some(c.as_polygon()),
            _ => None,
        }
    }
}

impl fmt::Debug for TypedShape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Polygon(arg0) => f.debug_tuple("Polygon").field(arg0).finish(),
            Self::Circle(arg0) => f.debug_tuple("Circle").field(arg0).finish(),
            Self::Cuboid(arg0) => f.debug_tuple("Cuboid").field(arg0).finish(),
            Self::Custom(_) => f.debug_tuple("Custom").finish(),
        }
    }
}

/// Trait implemented by every shape that can be attached to a collider.
///
/// A shape owns world-space state: its `position`, its `bounds`, and whatever cache its
/// algorithms need. That state is refreshed by [`Shape::recalculate_bounds`] each time the
/// owning transform changes, and is only read by the queries.
pub trait Shape: DowncastSync {
    /// Gets the type tag of this shape.
    fn shape_type(&self) -> ShapeType;

    /// Gets the underlying shape as an enum.
    fn as_typed_shape(&self) -> TypedShape<'_>;

    /// World-space position of the shape: the collider position plus [`Shape::center`].
    fn position(&self) -> Point<Real>;

    /// Offset of the shape from the position of the transform owning its collider.
    fn center(&self) -> Vector<Real>;

    /// World-space bounding box of the shape.
    fn bounds(&self) -> &Aabb;

    /// Recomputes the world-space geometry of this shape after its collider's transform changed.
    fn recalculate_bounds(&mut self, collider: &ColliderContext);

    /// Tests if the world-space point `point` is inside of this shape.
    fn contains_point(&self, point: &Point<Real>) -> bool;

    /// Computes the collision between the world-space point `point` and this shape.
    ///
    /// The result is expressed from the point's perspective: its normal points from the point
    /// toward this shape.
    fn point_collides_with_shape(&self, point: &Point<Real>) -> Option<CollisionResult>;

    /// Tests if this shape and `other` intersect.
    ///
    /// Returns `Err(Unsupported)` if no algorithm exists for this pair of shapes.
    fn overlaps(&self, other: &dyn Shape) -> Result<bool, Unsupported> {
        DefaultQueryDispatcher.overlaps_typed(self.as_typed_shape(), other.as_typed_shape())
    }

    /// Computes the collision between this shape and `other`.
    ///
    /// The normal of the result points from `self` toward `other`. Returns `Ok(None)` if the
    /// shapes do not intersect and `Err(Unsupported)` if no algorithm exists for this pair of
    /// shapes.
    fn collides_with_shape(
        &self,
        other: &dyn Shape,
    ) -> Result<Option<CollisionResult>, Unsupported> {
        DefaultQueryDispatcher.collides_typed(self.as_typed_shape(), other.as_typed_shape())
    }
}

impl_downcast!(sync Shape);

impl dyn Shape {
    /// Converts this abstract shape to the given shape, if it is one.
    pub fn as_shape<T: Shape>(&self) -> Option<&T> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a polygon, if it is one.
    pub fn as_polygon(&self) -> Option<&Polygon> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a circle, if it is one.
    pub fn as_circle(&self) -> Option<&Circle> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a cuboid, if it is one.
    pub fn as_cuboid(&self) -> Option<&Cuboid> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a mutable polygon, if it is one.
    pub fn as_polygon_mut(&mut self) -> Option<&mut Polygon> {
        self.downcast_mut()
    }

    /// Converts this abstract shape to a mutable circle, if it is one.
    pub fn as_circle_mut(&mut self) -> Option<&mut Circle> {
        self.downcast_mut()
    }

    /// Converts this abstract shape to a mutable cuboid, if it is one.
    pub fn as_cuboid_mut(&mut self) -> Option<&mut Cuboid> {
        self.downcast_mut()
    }
}

impl fmt::Debug for dyn Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shape")
            .field("shape_type", &self.shape_type())
            .field("position", &self.position())
            .field("bounds", self.bounds())
            .finish()
    }
}
