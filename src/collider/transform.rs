use crate::math::{Point, Real, Vector};
use num::Zero;

/// The position, rotation and scale of the entity owning a collider.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Transform {
    /// World-space position.
    pub position: Point<Real>,
    /// Rotation angle, in radians.
    pub rotation: Real,
    /// Per-axis scaling factor.
    pub scale: Vector<Real>,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// A transform at the origin, without rotation and with a unit scale.
    #[inline]
    pub fn identity() -> Self {
        Self {
            position: Point::origin(),
            rotation: 0.0,
            scale: Vector::repeat(1.0),
        }
    }

    /// A transform with the given position, without rotation and with a unit scale.
    #[inline]
    pub fn translation(x: Real, y: Real) -> Self {
        Self {
            position: Point::new(x, y),
            ..Self::identity()
        }
    }

    /// The rotation angle, in degrees.
    #[inline]
    pub fn rotation_degrees(&self) -> Real {
        self.rotation.to_degrees()
    }

    /// Is the scale exactly `(1, 1)`?
    #[inline]
    pub fn has_unit_scale(&self) -> bool {
        self.scale == Vector::repeat(1.0)
    }

    /// Is the rotation exactly zero?
    #[inline]
    pub fn is_unrotated(&self) -> bool {
        self.rotation.is_zero()
    }
}
