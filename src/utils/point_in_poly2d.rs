use crate::math::{Point, Real};

/// Tests if the given point is inside a closed polygon using the even-odd crossing rule.
///
/// A horizontal ray starting at `pt` and going toward `+x` is intersected with every edge;
/// the point is inside if it crosses an odd number of edges. An edge only counts when its
/// endpoints lie strictly on different sides of `pt.y` (one above, one at or below), so
/// horizontal edges never contribute and never cause a division by zero.
///
/// Boundary points follow a half-open convention: points on a lower or left boundary are
/// inside, points on an upper or right boundary are outside. For an axis-aligned square the
/// minimum corner is inside while the maximum corner is not.
pub fn point_in_poly2d(pt: &Point<Real>, poly: &[Point<Real>]) -> bool {
    if poly.is_empty() {
        return false;
    }

    let mut inside = false;
    let mut j = poly.len() - 1;

    for (i, pi) in poly.iter().enumerate() {
        let pj = &poly[j];

        if (pi.y > pt.y) != (pj.y > pt.y) {
            let x_cross = (pj.x - pi.x) * (pt.y - pi.y) / (pj.y - pi.y) + pi.x;

            if pt.x < x_cross {
                inside = !inside;
            }
        }

        j = i;
    }

    inside
}
