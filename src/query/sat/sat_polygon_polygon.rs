use crate::math::{Real, Vector};
use crate::query::CollisionResult;
use crate::shape::{Polygon, Shape};
use crate::utils;
use num::Zero;

/// Projects `poly` on `axis`, in world-space.
#[inline]
fn polygon_interval(axis: &Vector<Real>, poly: &Polygon) -> (Real, Real) {
    let (min, max) = utils::point_cloud_projection(axis, poly.points());
    let offset = poly.position().coords.dot(axis);
    (min + offset, max + offset)
}

/// Computes the penetration of `poly2` into `poly1` along `axis`.
///
/// Returns the overlap of both projection intervals (non-positive if they are disjoint or just
/// touching) and the sign of `axis` that points from `poly1` toward `poly2`. When the
/// intervals are nested, the overlap is the smallest push out of either end.
#[inline]
pub fn polygon_polygon_compute_overlap_wrt_axis(
    poly1: &Polygon,
    poly2: &Polygon,
    axis: &Vector<Real>,
) -> (Real, Vector<Real>) {
    let (min1, max1) = polygon_interval(axis, poly1);
    let (min2, max2) = polygon_interval(axis, poly2);

    // Push `poly2` toward `+axis` vs. toward `-axis`.
    let forward = max1 - min2;
    let backward = max2 - min1;

    if forward < backward {
        (forward, *axis)
    } else if backward < forward {
        (backward, -*axis)
    } else {
        let offset = poly2.position() - poly1.position();
        if offset.dot(axis) < 0.0 {
            (backward, -*axis)
        } else {
            (forward, *axis)
        }
    }
}

/// Separating Axis Theorem test between two convex polygons.
///
/// The candidate axes are the edge normals of `poly1` followed by the edge normals of `poly2`
/// (boxes only contribute two axes; the zero normals of degenerate edges are skipped). Both
/// polygons are projected on each axis: as soon as one axis shows no positive overlap, the
/// polygons are separated and `None` is returned. Polygons that only touch are separated.
///
/// Otherwise the axis with the smallest overlap becomes the normal of the result, oriented
/// from `poly1` toward `poly2`, and that overlap is the depth. Ties keep the first axis found.
/// Because both polygons are projected in world-space, swapping the arguments yields the same
/// depth and the opposite normal, up to tie-breaking between equally good axes.
pub fn polygon_polygon(poly1: &Polygon, poly2: &Polygon) -> Option<CollisionResult> {
    let mut min_overlap = Real::MAX;
    let mut best_axis = Vector::zeros();

    for axis in poly1.edge_normals().iter().chain(poly2.edge_normals()) {
        if axis.is_zero() {
            continue;
        }

        let (overlap, oriented_axis) = polygon_polygon_compute_overlap_wrt_axis(poly1, poly2, axis);

        if overlap <= 0.0 {
            return None;
        }

        if overlap < min_overlap {
            min_overlap = overlap;
            best_axis = oriented_axis;
        }
    }

    if best_axis.is_zero() {
        // Every edge of both polygons is degenerate.
        log::debug!("no valid separating axis between two degenerate polygons");
        return None;
    }

    Some(CollisionResult::new(best_axis, min_overlap, None))
}
