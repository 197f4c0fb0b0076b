use crate::bounding_volume::Aabb;
use crate::collider::ColliderContext;
use crate::math::{Point, Real, Vector};
use crate::query::{self, CollisionResult};
use crate::shape::{Shape, ShapeType, TypedShape};
use crate::utils;

/// A circle attached to a collider.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Circle {
    radius: Real,
    original_radius: Real,
    center: Vector<Real>,
    position: Point<Real>,
    bounds: Aabb,
}

impl Circle {
    /// Creates a new circle with the given radius, centered at the origin.
    #[inline]
    pub fn new(radius: Real) -> Circle {
        Circle {
            radius,
            original_radius: radius,
            center: Vector::zeros(),
            position: Point::origin(),
            bounds: Aabb::from_half_extents(Point::origin(), Vector::repeat(radius)),
        }
    }

    /// The current radius, after the scale of the owning transform was applied.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// The radius given to [`Circle::new`] or [`Circle::set_radius`].
    #[inline]
    pub fn original_radius(&self) -> Real {
        self.original_radius
    }

    /// Changes the radius of this circle.
    ///
    /// The bounds are only refreshed by the next [`Shape::recalculate_bounds`].
    pub fn set_radius(&mut self, radius: Real) {
        self.radius = radius;
        self.original_radius = radius;
    }
}

impl Shape for Circle {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Circle
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Circle(self)
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
            let max_scale = transform.scale.x.abs().max(transform.scale.y.abs());
            self.radius = self.original_radius * max_scale;

            if !has_unit_scale {
                self.center = local_offset.component_mul(&transform.scale);
            }

            if !transform.is_unrotated() {
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
        }

        self.position = collider.transform.position + self.center;
        self.bounds = Aabb::from_half_extents(self.position, Vector::repeat(self.radius));
    }

    /// Tests if `point` is inside of this circle, boundary included.
    fn contains_point(&self, point: &Point<Real>) -> bool {
        (point - self.position).norm_squared() <= self.radius * self.radius
    }

    fn point_collides_with_shape(&self, point: &Point<Real>) -> Option<CollisionResult> {
        query::details::collision_point_circle(point, self)
    }
}
