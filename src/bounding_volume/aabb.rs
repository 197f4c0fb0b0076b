//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector, DIM};

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is defined by its minimum and maximum corners. Its edges are always parallel to the
/// coordinate axes, which makes it very cheap to build from a point set and to test against
/// other AABBs. Every shape of this crate keeps the world-space AABB of its current geometry in
/// sync with the transform of its collider; broad phases use it to cull pairs before running the
/// exact narrow-phase algorithms.
///
/// # Invariant
///
/// `mins.x <= maxs.x` and `mins.y <= maxs.y`, except for the value returned by
/// [`Aabb::new_invalid`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Default for Aabb {
    fn default() -> Self {
        Self::new(Point::origin(), Point::origin())
    }
}

impl Aabb {
    /// Creates a new AABB.
    ///
    /// # Arguments:
    ///   * `mins` - position of the point with the smallest coordinates.
    ///   * `maxs` - position of the point with the highest coordinates. Each component of `mins`
    ///     must be smaller than the related components of `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with `mins` components set to `Real::max_values` and `maxs`
    /// components set to `-Real::max_values`.
    ///
    /// This is often used as the initial values of some AABB merging algorithms.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::MAX).into(),
            Vector::repeat(-Real::MAX).into(),
        )
    }

    /// Creates a new AABB from its center and its half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Creates a new AABB enclosing a set of points.
    ///
    /// Returns [`Aabb::new_invalid`] if the set is empty.
    pub fn from_points<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        let mut result = Self::new_invalid();

        for pt in pts {
            result.take_point(*pt);
        }

        result
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        let half: Real = na::convert::<f64, Real>(0.5);
        (self.maxs - self.mins) * half
    }

    /// The extents of this AABB.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Enlarges this AABB so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// Returns an AABB with the same size as `self` but translated by `translation`.
    #[inline]
    #[must_use]
    pub fn translated(mut self, translation: &Vector<Real>) -> Self {
        self.mins += translation;
        self.maxs += translation;
        self
    }

    /// Tests if this AABB and `other` share interior points.
    ///
    /// AABBs that merely touch along an edge or a corner do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        other.mins.x < self.maxs.x
            && self.mins.x < other.maxs.x
            && other.mins.y < self.maxs.y
            && self.mins.y < other.maxs.y
    }

    /// Tests if the given point is inside this AABB.
    ///
    /// The test is half-open: the minimum boundary is inside, the maximum boundary is not.
    /// This matches the convention of [`crate::utils::point_in_poly2d`].
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        for i in 0..DIM {
            if point[i] < self.mins[i] || point[i] >= self.maxs[i] {
                return false;
            }
        }

        true
    }

    /// The point of this AABB closest to `point`.
    ///
    /// Returns `point` itself if it is inside of this AABB.
    #[inline]
    pub fn closest_point(&self, point: &Point<Real>) -> Point<Real> {
        Point::from(point.coords.sup(&self.mins.coords).inf(&self.maxs.coords))
    }
}
