use crate::collider::Transform;
use crate::math::{Real, Vector};

/// Everything a shape needs to know about its collider to recompute its cached geometry.
///
/// Shapes never hold on to their collider; the collider hands this context to
/// [`Shape::recalculate_bounds`](crate::shape::Shape::recalculate_bounds) whenever the
/// owning transform changed.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct ColliderContext {
    /// Offset of the shape relative to the transform position, before scale and rotation.
    local_offset: Vector<Real>,
    /// Cached `local_offset.norm()`.
    local_offset_length: Real,
    /// Should the shape follow the scale and rotation of the transform, or only its position?
    pub scale_and_rotate_with_transform: bool,
    /// The transform of the entity owning the collider.
    pub transform: Transform,
    /// Did the rotation of the transform change since the shape geometry was last recomputed?
    pub rotation_dirty: bool,
}

impl Default for ColliderContext {
    fn default() -> Self {
        Self::new(Vector::zeros())
    }
}

impl ColliderContext {
    /// A context with the given local offset, an identity transform, and scale/rotation
    /// propagation enabled.
    pub fn new(local_offset: Vector<Real>) -> Self {
        Self {
            local_offset,
            local_offset_length: local_offset.norm(),
            scale_and_rotate_with_transform: true,
            transform: Transform::identity(),
            rotation_dirty: false,
        }
    }

    /// Sets the transform of this context.
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// The offset of the shape relative to the transform position.
    #[inline]
    pub fn local_offset(&self) -> Vector<Real> {
        self.local_offset
    }

    /// The cached length of [`Self::local_offset`].
    #[inline]
    pub fn local_offset_length(&self) -> Real {
        self.local_offset_length
    }

    /// Changes the local offset and refreshes its cached length.
    pub fn set_local_offset(&mut self, local_offset: Vector<Real>) {
        self.local_offset = local_offset;
        self.local_offset_length = local_offset.norm();
    }
}
