//! Application of the Separating Axis Theorem (SAT) for collision detection.
//!
//! Two convex shapes do **not** intersect if and only if there exists an axis onto which their
//! projections do not overlap. For polygons, the candidate axes are the normals of their edges.
//!
//! When every candidate axis shows an overlap, the axis with the smallest overlap gives the
//! minimum translation vector: the shortest displacement separating both shapes. This is the
//! usual SAT heuristic for the penetration depth of convex polygons.
//!
//! This module provides:
//!
//! - **Polygon-Polygon**: SAT over the edge normals of both polygons.
//! - **Cuboid-Cuboid**: the same test restricted to the `x` and `y` axes, for unrotated boxes.

pub use self::sat_cuboid_cuboid::*;
pub use self::sat_polygon_polygon::*;

mod sat_cuboid_cuboid;
mod sat_polygon_polygon;
