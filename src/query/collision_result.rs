use crate::math::{Point, Real, Vector};

/// The result of a collision query between two intersecting shapes.
///
/// The result is always expressed from the perspective of the first shape of the query:
/// `normal` points from the first shape toward the second one, and translating the first shape
/// by `-minimum_translation_vector` (or the second one by `+minimum_translation_vector`)
/// separates them.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CollisionResult {
    /// Unit direction of minimum penetration, from the first shape toward the second one.
    ///
    /// This is the zero vector only when the geometry is degenerate (e.g. the closest polygon
    /// edge has a zero length).
    pub normal: Vector<Real>,
    /// Penetration depth along `normal`.
    pub depth: Real,
    /// `normal * depth`.
    pub minimum_translation_vector: Vector<Real>,
    /// World-space contact point, for the algorithms that compute one.
    pub point: Option<Point<Real>>,
}

impl CollisionResult {
    /// Creates a new collision result; the minimum translation vector is `normal * depth`.
    #[inline]
    pub fn new(normal: Vector<Real>, depth: Real, point: Option<Point<Real>>) -> Self {
        CollisionResult {
            normal,
            depth,
            minimum_translation_vector: normal * depth,
            point,
        }
    }

    /// Negates the normal and the minimum translation vector.
    ///
    /// This turns the result of a query between `a` and `b` into the result of the same query
    /// between `b` and `a`, without running the query again. The depth and the contact point
    /// are unchanged.
    #[inline]
    pub fn invert(&mut self) {
        self.normal = -self.normal;
        self.minimum_translation_vector = -self.minimum_translation_vector;
    }

    /// Returns the inverted version of `self`; see [`CollisionResult::invert`].
    #[inline]
    #[must_use]
    pub fn inverted(mut self) -> Self {
        self.invert();
        self
    }
}
