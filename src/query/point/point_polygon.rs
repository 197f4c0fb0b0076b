use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::query::details::closest_point_on_line;

/// The point of the boundary of a polygon closest to a given point.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct ClosestPointOnPolygon {
    /// The closest point, in the same space as the polygon points.
    pub closest_point: Point<Real>,
    /// The squared distance between the query point and `closest_point`.
    pub distance_squared: Real,
    /// The unit perpendicular `(dy, -dx)` of the edge holding `closest_point`.
    ///
    /// It points outward for a counter-clockwise polygon. This is the zero vector if that edge
    /// has a zero length.
    pub edge_normal: Vector<Real>,
    /// The index `i` of the edge `(points[i], points[(i + 1) % n])` holding `closest_point`.
    pub edge_index: usize,
}

/// Finds the point of the boundary of the closed polygon `points` closest to `point`.
///
/// Every edge is visited and the closest point on each edge is computed with
/// [`closest_point_on_line`]. When several edges are at the same distance, the first one in
/// the winding order wins. The edge normal is only normalized once, for the winning edge.
///
/// # Panics
///
/// Panics if `points` is empty.
pub fn closest_point_on_polygon_to_point(
    points: &[Point<Real>],
    point: &Point<Real>,
) -> ClosestPointOnPolygon {
    assert!(
        !points.is_empty(),
        "Cannot find the closest point on a polygon without points."
    );

    let mut distance_squared = Real::MAX;
    let mut closest_point = points[0];
    let mut edge_index = 0;

    for i in 0..points.len() {
        let j = (i + 1) % points.len();
        let closest = closest_point_on_line(&points[i], &points[j], point);
        let candidate = na::distance_squared(point, &closest);

        if candidate < distance_squared {
            distance_squared = candidate;
            closest_point = closest;
            edge_index = i;
        }
    }

    let line = points[(edge_index + 1) % points.len()] - points[edge_index];
    let edge_normal = UnitVector::try_new(Vector::new(line.y, -line.x), DEFAULT_EPSILON)
        .map(|n| n.into_inner())
        .unwrap_or_else(|| {
            log::debug!("closest polygon edge {} is degenerate", edge_index);
            Vector::zeros()
        });

    ClosestPointOnPolygon {
        closest_point,
        distance_squared,
        edge_normal,
        edge_index,
    }
}
