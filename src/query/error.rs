use crate::shape::ShapeType;

/// Error indicating that a collision query is not supported between two kinds of shapes.
///
/// Every pair of the built-in shapes ([`Polygon`], [`Circle`], [`Cuboid`]) has an
/// algorithm, so this error only shows up when a custom [`Shape`] implementation takes part in
/// a query. It signals a missing algorithm, not the absence of a collision: do not treat it as
/// "no contact".
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use collide2d::query::Unsupported;
/// use collide2d::shape::ShapeType;
///
/// let err = Unsupported {
///     shape1: ShapeType::Polygon,
///     shape2: ShapeType::Custom,
/// };
/// assert_eq!(
///     err.to_string(),
///     "collision queries between a polygon and a custom shape are not supported"
/// );
/// # }
/// ```
///
/// [`Polygon`]: crate::shape::Polygon
/// [`Circle`]: crate::shape::Circle
/// [`Cuboid`]: crate::shape::Cuboid
/// [`Shape`]: crate::shape::Shape
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
#[error("collision queries between a {shape1} and a {shape2} are not supported")]
pub struct Unsupported {
    /// The type of the first shape of the query.
    pub shape1: ShapeType,
    /// The type of the second shape of the query.
    pub shape2: ShapeType,
}

impl Unsupported {
    /// Creates the error for a query between a `shape1` and a `shape2`.
    #[inline]
    pub fn new(shape1: ShapeType, shape2: ShapeType) -> Self {
        Self { shape1, shape2 }
    }
}
