use crate::math::*;

/// Computes the normalized perpendicular `(dy, -dx)` of the segment `pts[0] -> pts[1]`.
///
/// For a polygon wound counter-clockwise (with the y axis pointing up) this is the outward
/// normal of the edge. Returns `None` if the segment is too small to have a well-defined
/// direction.
#[inline]
pub fn ccw_face_normal(pts: [&Point<Real>; 2]) -> Option<UnitVector<Real>> {
    let ab = *pts[1] - *pts[0];
    let res = Vector::new(ab[1], -ab[0]);

    UnitVector::try_new(res, DEFAULT_EPSILON)
}
