use crate::bounding_volume::Aabb;
use crate::collider::ColliderContext;
use crate::math::{AffineMatrix, Point, Real, Rotation, Vector};
use crate::query::details::{closest_point_on_polygon_to_point, ClosestPointOnPolygon};
use crate::query::{self, CollisionResult};
use crate::shape::{Shape, ShapeType, TypedShape};
use crate::utils;
use alloc::vec::Vec;
use na::RealField;

/// Error raised when a polygon is built from an invalid set of points.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PolygonError {
    /// A polygon needs at least two points to have an edge.
    #[error("a polygon needs at least 2 points, got {0}.")]
    NotEnoughPoints(usize),
    /// One of the points has a NaN or infinite coordinate.
    #[error("the point {0} of the polygon has a non-finite coordinate.")]
    NonFinitePoint(usize),
}

/// A 2D convex polygon attached to a collider.
///
/// The polygon keeps its vertices in two spaces:
/// - the original points, exactly as given to [`Polygon::set_points`];
/// - the current points, i.e., the original points after the scale and rotation of the owning
///   transform were applied around the polygon centroid. They are expressed relative to
///   [`Shape::position`], so the world-space vertex `i` is `position + points[i]`.
///
/// The order of the points is the winding order and is preserved by every operation. Edge
/// normals are cached and rebuilt by the operations modifying the current points, so every
/// query only reads the polygon.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct Polygon {
    points: Vec<Point<Real>>,
    original_points: Vec<Point<Real>>,
    polygon_center: Point<Real>,
    edge_normals: Vec<Vector<Real>>,
    edge_normals_dirty: bool,
    is_box: bool,
    is_unrotated: bool,
    center: Vector<Real>,
    position: Point<Real>,
    bounds: Aabb,
    // The transform last applied to the original points.
    applied_rotation: Real,
    applied_scale: Vector<Real>,
}

impl Polygon {
    /// Creates a new polygon from a set of points describing a convex polygon.
    ///
    /// The points must be given in a consistent winding order. Convexity is not checked.
    pub fn new(points: Vec<Point<Real>>) -> Result<Self, PolygonError> {
        Self::with_box_flag(points, false)
    }

    /// Creates a new polygon, flagging it as a box if `is_box` is `true`.
    ///
    /// A box only has two distinct edge normals since its opposite edges are parallel, so only
    /// the normals of its first two edges are computed. The flag is never recomputed from the
    /// geometry: passing `true` for a polygon that is not a parallelogram yields wrong results.
    pub fn with_box_flag(points: Vec<Point<Real>>, is_box: bool) -> Result<Self, PolygonError> {
        Self::validate(&points)?;
        Ok(Self::from_points_unchecked(points, is_box))
    }

    pub(crate) fn from_points_unchecked(points: Vec<Point<Real>>, is_box: bool) -> Self {
        let mut result = Polygon {
            original_points: points.clone(),
            polygon_center: utils::center(&points),
            bounds: Aabb::from_points(&points),
            points,
            edge_normals: Vec::new(),
            edge_normals_dirty: true,
            is_box,
            is_unrotated: true,
            center: Vector::zeros(),
            position: Point::origin(),
            applied_rotation: 0.0,
            applied_scale: Vector::repeat(1.0),
        };
        result.refresh_edge_normals();
        result
    }

    fn validate(points: &[Point<Real>]) -> Result<(), PolygonError> {
        if points.len() < 2 {
            return Err(PolygonError::NotEnoughPoints(points.len()));
        }

        if let Some(id) = points
            .iter()
            .position(|pt| !pt.x.is_finite() || !pt.y.is_finite())
        {
            return Err(PolygonError::NonFinitePoint(id));
        }

        Ok(())
    }

    /// Replaces the local geometry of this polygon.
    ///
    /// The points are stored as the current points and copied as the original points; the
    /// centroid and the edge normals are recomputed. Any scale or rotation applied by a previous
    /// [`Shape::recalculate_bounds`] is discarded until the next call to it.
    ///
    /// On error, the polygon is left unchanged.
    pub fn set_points(&mut self, points: Vec<Point<Real>>) -> Result<(), PolygonError> {
        Self::validate(&points)?;
        self.replace_points_unchecked(points);
        Ok(())
    }

    pub(crate) fn replace_points_unchecked(&mut self, points: Vec<Point<Real>>) {
        self.original_points.clear();
        self.original_points.extend_from_slice(&points);
        self.points = points;
        self.applied_rotation = 0.0;
        self.applied_scale = Vector::repeat(1.0);
        self.is_unrotated = true;
        self.bounds = Aabb::from_points(&self.points).translated(&self.position.coords);
        self.recalculate_center_and_edge_normals();
    }

    /// Recomputes the centroid from the current points and rebuilds the edge normals.
    pub fn recalculate_center_and_edge_normals(&mut self) {
        self.polygon_center = Self::find_polygon_center(&self.points);
        self.edge_normals_dirty = true;
        self.refresh_edge_normals();
    }

    fn refresh_edge_normals(&mut self) {
        if !self.edge_normals_dirty {
            return;
        }

        let num_points = self.points.len();
        let total_edges = if self.is_box {
            num_points.min(2)
        } else {
            num_points
        };

        log::trace!("rebuilding {} edge normals", total_edges);

        self.edge_normals.clear();
        self.edge_normals.extend((0..total_edges).map(|i1| {
            let i2 = (i1 + 1) % num_points;
            match utils::ccw_face_normal([&self.points[i1], &self.points[i2]]) {
                Some(normal) => normal.into_inner(),
                None => {
                    log::debug!(
                        "degenerate polygon edge ({}, {}): using a zero normal",
                        i1,
                        i2
                    );
                    Vector::zeros()
                }
            }
        }));
        self.edge_normals_dirty = false;
    }

    /// The current vertices of this polygon, relative to its position.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The vertices given to the last [`Polygon::set_points`], before any transform.
    #[inline]
    pub fn original_points(&self) -> &[Point<Real>] {
        &self.original_points
    }

    /// The unit normals of the edges of this polygon.
    ///
    /// The normal `i` is the normalized perpendicular `(dy, -dx)` of the edge going from
    /// `points[i]` to `points[(i + 1) % n]`; it points outward if the polygon is wound
    /// counter-clockwise. There is one normal per edge, except for boxes which only have two.
    /// The normal of a zero-length edge is the zero vector.
    #[inline]
    pub fn edge_normals(&self) -> &[Vector<Real>] {
        &self.edge_normals
    }

    /// The centroid of the points at the last [`Polygon::set_points`].
    #[inline]
    pub fn polygon_center(&self) -> Point<Real> {
        self.polygon_center
    }

    /// Is this polygon flagged as a box?
    #[inline]
    pub fn is_box(&self) -> bool {
        self.is_box
    }

    /// Was the rotation of the owning transform exactly zero at the last recompute?
    #[inline]
    pub fn is_unrotated(&self) -> bool {
        self.is_unrotated
    }

    /// The arithmetic mean of a set of points.
    ///
    /// # Panics
    ///
    /// Panics if `points` is empty.
    pub fn find_polygon_center(points: &[Point<Real>]) -> Point<Real> {
        utils::center(points)
    }

    /// Finds the point of the boundary of the polygon `points` closest to `point`.
    ///
    /// See [`closest_point_on_polygon_to_point`] for details.
    pub fn closest_point_on_polygon_to_point(
        points: &[Point<Real>],
        point: &Point<Real>,
    ) -> ClosestPointOnPolygon {
        closest_point_on_polygon_to_point(points, point)
    }

    /// Builds the vertices of a regular polygon (hexagon, octagon, n-gon) centered at the origin.
    ///
    /// The vertex `i` is located at the angle `2π * i / vert_count` on the circle of radius
    /// `radius`, so the vertices are wound counter-clockwise starting on the positive x axis.
    /// Both coordinates are scaled by `radius`.
    pub fn build_symmetrical_polygon(vert_count: usize, radius: Real) -> Vec<Point<Real>> {
        let step = Real::two_pi() / na::convert::<f64, Real>(vert_count as f64);

        (0..vert_count)
            .map(|i| {
                let angle = step * na::convert::<f64, Real>(i as f64);
                utils::point_on_circle(&Point::origin(), radius, angle)
            })
            .collect()
    }
}

impl Shape for Polygon {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Polygon
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Polygon(self)
    }

    #[inline]
    fn position(&self) -> Point<Real> {
        self.position
    }

    #[inline]
    fn center(&self) -> Vector<Real> {
        self.center
    }

    #[inline]
    fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    fn recalculate_bounds(&mut self, collider: &ColliderContext) {
        let local_offset = collider.local_offset();
        self.center = local_offset;

        if collider.scale_and_rotate_with_transform {
            let transform = &collider.transform;
            let has_unit_scale = transform.has_unit_scale();
            let mut combined = AffineMatrix::new_translation(&-self.polygon_center.coords);

            if !has_unit_scale {
                combined = AffineMatrix::new_nonuniform_scaling(&transform.scale) * combined;
                self.center = local_offset.component_mul(&transform.scale);
            }

            if !transform.is_unrotated() {
                combined = Rotation::new(transform.rotation).to_homogeneous() * combined;

                let offset_angle = local_offset.y.atan2(local_offset.x);
                let offset_length = if has_unit_scale {
                    collider.local_offset_length()
                } else {
                    local_offset.component_mul(&transform.scale).norm()
                };
                self.center = utils::point_on_circle(
                    &Point::origin(),
                    offset_length,
                    transform.rotation + offset_angle,
                )
                .coords;
            }

            combined = AffineMatrix::new_translation(&self.polygon_center.coords) * combined;

            for (pt, original) in self.points.iter_mut().zip(self.original_points.iter()) {
                *pt = combined.transform_point(original);
            }

            self.is_unrotated = transform.is_unrotated();

            if collider.rotation_dirty
                || transform.rotation != self.applied_rotation
                || transform.scale != self.applied_scale
            {
                self.edge_normals_dirty = true;
            }

            self.applied_rotation = transform.rotation;
            self.applied_scale = transform.scale;
        }

        self.position = collider.transform.position + self.center;
        self.bounds = Aabb::from_points(&self.points).translated(&self.position.coords);
        self.refresh_edge_normals();
    }

    /// Tests if `point` is inside of this polygon with the even-odd crossing rule.
    ///
    /// See [`utils::point_in_poly2d`] for the convention used for points on the boundary.
    fn contains_point(&self, point: &Point<Real>) -> bool {
        let local_point = Point::from(point - self.position);
        utils::point_in_poly2d(&local_point, &self.points)
    }

    fn point_collides_with_shape(&self, point: &Point<Real>) -> Option<CollisionResult> {
        query::details::collision_point_polygon(point, self)
    }
}
