use crate::math::{Point, Real, Vector};
use crate::query::details::closest_point_on_polygon_to_point;
use crate::query::CollisionResult;
use crate::shape::{Circle, Polygon, Shape};
use na::ComplexField;
use num::Zero;

/// Collision between a disk of center `center` and radius `radius`, and a polygon.
///
/// The normal points from the disk toward the polygon and the contact point is the point of
/// the polygon boundary closest to `center`, in world-space.
pub fn collision_disk_polygon(
    center: &Point<Real>,
    radius: Real,
    polygon: &Polygon,
) -> Option<CollisionResult> {
    let local_center = Point::from(center - polygon.position());
    let closest = closest_point_on_polygon_to_point(polygon.points(), &local_center);
    let inside = polygon.contains_point(center);

    if !inside && closest.distance_squared >= radius * radius {
        return None;
    }

    let point = Some(closest.closest_point + polygon.position().coords);

    if inside || closest.distance_squared.is_zero() {
        // Edge normals only point outward for counter-clockwise polygons.
        let outward = if is_clockwise(polygon.points()) {
            -closest.edge_normal
        } else {
            closest.edge_normal
        };
        let distance = ComplexField::sqrt(closest.distance_squared);

        Some(CollisionResult::new(-outward, radius + distance, point))
    } else {
        let distance = ComplexField::sqrt(closest.distance_squared);
        let normal: Vector<Real> = (closest.closest_point - local_center) / distance;

        Some(CollisionResult::new(normal, radius - distance, point))
    }
}

/// Is the signed area of the polygon with vertices `points` negative?
fn is_clockwise(points: &[Point<Real>]) -> bool {
    let mut area2 = 0.0;
    for (i, a) in points.iter().enumerate() {
        let b = &points[(i + 1) % points.len()];
        area2 += a.x * b.y - b.x * a.y;
    }
    area2 < 0.0
}

/// Collision between a circle and a polygon.
///
/// They collide if the circle center is inside of the polygon, or if the polygon boundary is
/// strictly closer to the center than the radius. The normal points from the circle toward the
/// polygon:
/// - if the center is outside of the polygon, the normal goes from the center to the closest
///   boundary point and the depth is `radius - distance`;
/// - if the center is inside, the normal is the inward normal of the closest edge and the depth
///   is `radius + distance`, enough to push the whole circle out through that edge.
///
/// The contact point is the closest point of the polygon boundary.
#[inline]
pub fn collision_circle_polygon(circle: &Circle, polygon: &Polygon) -> Option<CollisionResult> {
    collision_disk_polygon(&circle.position(), circle.radius(), polygon)
}

/// Collision between a polygon and a circle.
///
/// Same as [`collision_circle_polygon`] with the normal oriented from the polygon toward the
/// circle.
#[inline]
pub fn collision_polygon_circle(polygon: &Polygon, circle: &Circle) -> Option<CollisionResult> {
    collision_circle_polygon(circle, polygon).map(|res| res.inverted())
}

/// Collision between a point and a polygon.
///
/// The point collides only if it is inside of the polygon. The normal is the inward normal of
/// the closest edge, the depth is the distance to that edge, and the contact point is the
/// closest point of the polygon boundary.
#[inline]
pub fn collision_point_polygon(point: &Point<Real>, polygon: &Polygon) -> Option<CollisionResult> {
    collision_disk_polygon(point, 0.0, polygon)
}
