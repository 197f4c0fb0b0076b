use crate::query::details;
use crate::query::{CollisionResult, QueryDispatcher, Unsupported};
use crate::shape::{Shape, TypedShape};

/// The dispatcher for the shapes provided by this crate.
///
/// The algorithm used for each pair of shapes is:
///
/// | first shape      | second shape     | `overlaps`                  | `collides`                   |
/// |------------------|------------------|-----------------------------|------------------------------|
/// | unrotated box    | unrotated box    | bounds intersection         | SAT on the `x` and `y` axes  |
/// | unrotated box    | circle           | rectangle-circle test       | circle-polygon               |
/// | polygon or box   | polygon or box   | SAT                         | SAT                          |
/// | polygon or box   | circle           | circle-polygon              | circle-polygon, inverted     |
/// | circle           | polygon or box   | circle-polygon              | circle-polygon               |
/// | circle           | circle           | circle-circle               | circle-circle                |
///
/// Any pair involving a [`TypedShape::Custom`] shape is [`Unsupported`].
///
/// Polygon-polygon results are computed with the arguments in the order they were given, never
/// by inverting the result of the swapped query.
#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultQueryDispatcher;

impl DefaultQueryDispatcher {
    /// Tests whether two shapes overlap, given their actual types.
    pub fn overlaps_typed(
        &self,
        g1: TypedShape<'_>,
        g2: TypedShape<'_>,
    ) -> Result<bool, Unsupported> {
        match (g1, g2) {
            (TypedShape::Cuboid(c1), TypedShape::Cuboid(c2)) => {
                Ok(details::intersection_test_cuboid_cuboid(c1, c2))
            }
            (TypedShape::Cuboid(c1), TypedShape::Circle(b2)) if c1.is_unrotated() => {
                Ok(details::intersection_test_aabb_circle(c1.bounds(), b2))
            }
            (TypedShape::Circle(b1), TypedShape::Cuboid(c2)) if c2.is_unrotated() => {
                Ok(details::intersection_test_circle_aabb(b1, c2.bounds()))
            }
            _ => self.collides_typed(g1, g2).map(|res| res.is_some()),
        }
    }

    /// Computes the collision between two shapes, given their actual types.
    pub fn collides_typed(
        &self,
        g1: TypedShape<'_>,
        g2: TypedShape<'_>,
    ) -> Result<Option<CollisionResult>, Unsupported> {
        if let (TypedShape::Cuboid(c1), TypedShape::Cuboid(c2)) = (g1, g2) {
            if c1.is_unrotated() && c2.is_unrotated() {
                return Ok(details::cuboid_cuboid(c1, c2));
            }
        }

        if let (Some(p1), Some(p2)) = (g1.as_polygon(), g2.as_polygon()) {
            return Ok(details::polygon_polygon(p1, p2));
        }

        match (g1, g2) {
            (TypedShape::Circle(b1), TypedShape::Circle(b2)) => {
                Ok(details::collision_circle_circle(b1, b2))
            }
            (TypedShape::Circle(b1), _) => match g2.as_polygon() {
                Some(p2) => Ok(details::collision_circle_polygon(b1, p2)),
                None => Err(unsupported(g1, g2)),
            },
            (_, TypedShape::Circle(b2)) => match g1.as_polygon() {
                Some(p1) => Ok(details::collision_polygon_circle(p1, b2)),
                None => Err(unsupported(g1, g2)),
            },
            _ => Err(unsupported(g1, g2)),
        }
    }
}

fn unsupported(g1: TypedShape<'_>, g2: TypedShape<'_>) -> Unsupported {
    let err = Unsupported::new(g1.shape_type(), g2.shape_type());
    log::debug!("{}", err);
    err
}

impl QueryDispatcher for DefaultQueryDispatcher {
    fn overlaps(&self, g1: &dyn Shape, g2: &dyn Shape) -> Result<bool, Unsupported> {
        self.overlaps_typed(g1.as_typed_shape(), g2.as_typed_shape())
    }

    fn collides(
        &self,
        g1: &dyn Shape,
        g2: &dyn Shape,
    ) -> Result<Option<CollisionResult>, Unsupported> {
        self.collides_typed(g1.as_typed_shape(), g2.as_typed_shape())
    }
}
