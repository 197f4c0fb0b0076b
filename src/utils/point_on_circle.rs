use crate::math::{Point, Real, Vector};

/// The point of the circle of the given `center` and `radius` located at `angle` radians.
#[inline]
pub fn point_on_circle(center: &Point<Real>, radius: Real, angle: Real) -> Point<Real> {
    let (sin, cos) = angle.sin_cos();
    center + Vector::new(cos, sin) * radius
}
