use crate::math::{Point, Real, Vector};

/// Projects a set of points on an axis, returning the `(min, max)` interval of the dot products.
///
/// The axis does not need to be normalized, but the interval is expressed in multiples of its
/// length. An empty slice projects to `(Real::MAX, -Real::MAX)`.
#[inline]
pub fn point_cloud_projection(axis: &Vector<Real>, points: &[Point<Real>]) -> (Real, Real) {
    points
        .iter()
        .map(|pt| pt.coords.dot(axis))
        .fold((Real::MAX, -Real::MAX), |(min, max), dot| {
            (min.min(dot), max.max(dot))
        })
}
