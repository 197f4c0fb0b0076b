use crate::math::{Real, Vector, DIM};
use crate::query::CollisionResult;
use crate::shape::{Cuboid, Shape};

/// Computes the collision between two unrotated boxes from their bounds.
///
/// This is the Separating Axis Theorem restricted to the `x` and `y` axes, which are the only
/// edge normals of axis-aligned boxes. The axis with the smallest overlap wins (`x` on ties),
/// and the normal points from `cuboid1` toward `cuboid2`. If one box is nested in the other
/// along an axis, the overlap is the shortest way out of either end.
///
/// Both boxes are assumed to be unrotated; use
/// [`polygon_polygon`](crate::query::details::polygon_polygon) otherwise.
pub fn cuboid_cuboid(cuboid1: &Cuboid, cuboid2: &Cuboid) -> Option<CollisionResult> {
    let aabb1 = cuboid1.bounds();
    let aabb2 = cuboid2.bounds();
    let center_offset = aabb2.center() - aabb1.center();

    let mut best_overlap = Real::MAX;
    let mut best_dir = Vector::zeros();

    for i in 0..DIM {
        // Push `cuboid2` toward `+axis` vs. toward `-axis`.
        let forward = aabb1.maxs[i] - aabb2.mins[i];
        let backward = aabb2.maxs[i] - aabb1.mins[i];
        let overlap = forward.min(backward);

        if overlap <= 0.0 {
            return None;
        }

        if overlap < best_overlap {
            let sign = if forward < backward {
                1.0
            } else if backward < forward {
                -1.0
            } else if center_offset[i] < 0.0 {
                -1.0
            } else {
                1.0
            };
            best_overlap = overlap;
            best_dir = Vector::ith(i, sign);
        }
    }

    Some(CollisionResult::new(best_dir, best_overlap, None))
}
