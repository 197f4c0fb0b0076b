use crate::collider::{ColliderContext, Transform};
use crate::math::{Point, Real, Vector};
use crate::query::{CollisionResult, Unsupported};
use crate::shape::Shape;

/// A shape attached to a transform.
///
/// The collider owns its shape and the [`ColliderContext`] the shape geometry is computed
/// from. Setters only record the new transform; call [`Collider::update`] to bring the
/// world-space geometry of the shape up to date before running queries.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use collide2d::collider::Collider;
/// use collide2d::math::{Point, Vector};
/// use collide2d::shape::{Cuboid, Shape};
///
/// let mut collider = Collider::new(Cuboid::new(Vector::new(1.0, 1.0)));
/// collider.set_position(Point::new(3.0, 0.0));
/// collider.update();
///
/// assert_eq!(collider.shape().bounds().mins, Point::new(2.0, -1.0));
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct Collider<S> {
    shape: S,
    context: ColliderContext,
}

impl<S: Shape> Collider<S> {
    /// Attaches `shape` to an identity transform, without local offset.
    ///
    /// The collider starts dirty so the first [`Collider::update`] computes everything.
    pub fn new(shape: S) -> Self {
        Self::with_context(shape, ColliderContext::default())
    }

    /// Attaches `shape` to the transform and local offset of `context`.
    pub fn with_context(shape: S, mut context: ColliderContext) -> Self {
        context.rotation_dirty = true;
        Self { shape, context }
    }

    /// The shape of this collider.
    #[inline]
    pub fn shape(&self) -> &S {
        &self.shape
    }

    /// A mutable reference to the shape of this collider.
    ///
    /// Changes to the shape geometry are only reflected in world-space after the next
    /// [`Collider::update`].
    #[inline]
    pub fn shape_mut(&mut self) -> &mut S {
        &mut self.shape
    }

    /// The context handed to the shape by [`Collider::update`].
    #[inline]
    pub fn context(&self) -> &ColliderContext {
        &self.context
    }

    /// The transform this collider follows.
    #[inline]
    pub fn transform(&self) -> &Transform {
        &self.context.transform
    }

    /// Replaces the whole transform.
    pub fn set_transform(&mut self, transform: Transform) {
        self.set_rotation(transform.rotation);
        self.context.transform.position = transform.position;
        self.context.transform.scale = transform.scale;
    }

    /// Moves the transform.
    pub fn set_position(&mut self, position: Point<Real>) {
        self.context.transform.position = position;
    }

    /// Rotates the transform to `rotation`, in radians.
    pub fn set_rotation(&mut self, rotation: Real) {
        if self.context.transform.rotation != rotation {
            self.context.transform.rotation = rotation;
            self.context.rotation_dirty = true;
        }
    }

    /// Rotates the transform to `degrees`.
    pub fn set_rotation_degrees(&mut self, degrees: Real) {
        self.set_rotation(degrees.to_radians());
    }

    /// Scales the transform.
    pub fn set_scale(&mut self, scale: Vector<Real>) {
        self.context.transform.scale = scale;
    }

    /// Moves the shape relative to the transform position.
    pub fn set_local_offset(&mut self, local_offset: Vector<Real>) {
        self.context.set_local_offset(local_offset);
    }

    /// Chooses whether the shape follows the scale and rotation of the transform, or only its
    /// position.
    pub fn set_scale_and_rotate_with_transform(&mut self, enabled: bool) {
        if self.context.scale_and_rotate_with_transform != enabled {
            self.context.scale_and_rotate_with_transform = enabled;
            self.context.rotation_dirty = true;
        }
    }

    /// Recomputes the world-space geometry of the shape from the current transform.
    pub fn update(&mut self) {
        self.shape.recalculate_bounds(&self.context);
        self.context.rotation_dirty = false;
    }

    /// Tests whether the shapes of two colliders overlap.
    pub fn overlaps<S2: Shape>(&self, other: &Collider<S2>) -> Result<bool, Unsupported> {
        self.shape.overlaps(&other.shape)
    }

    /// Computes the collision between the shapes of two colliders.
    ///
    /// The normal of the result points from `self` toward `other`.
    pub fn collides_with<S2: Shape>(
        &self,
        other: &Collider<S2>,
    ) -> Result<Option<CollisionResult>, Unsupported> {
        self.shape.collides_with_shape(&other.shape)
    }
}
