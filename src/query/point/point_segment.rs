use crate::math::{Point, Real};
use num::Zero;

/// The point of the segment `[a, b]` closest to `point`.
///
/// `point` is projected on the line `(a, b)` and the projection parameter is clamped to
/// `[0, 1]`. A zero-length segment returns `a`.
#[inline]
pub fn closest_point_on_line(a: &Point<Real>, b: &Point<Real>, point: &Point<Real>) -> Point<Real> {
    let ab = b - a;
    let ap = point - a;
    let sqnab = ab.norm_squared();

    if sqnab.is_zero() {
        log::debug!("closest point on a zero-length segment: returning its first endpoint");
        return *a;
    }

    let t = (ab.dot(&ap) / sqnab).clamp(0.0, 1.0);
    a + ab * t
}
