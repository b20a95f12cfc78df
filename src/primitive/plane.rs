use crate::bounds::BoundingBox;
use crate::point::Point;
use crate::ray::Ray;
use crate::vector::Vector;

const EPSILON: f64 = 1e-5;

pub fn bounds() -> BoundingBox {
    BoundingBox::new(
        Point::new(f64::NEG_INFINITY, 0.0, f64::NEG_INFINITY),
        Point::new(f64::INFINITY, 0.0, f64::INFINITY),
    )
}

/// An xz plane through the origin. Misses a ray that runs parallel to it.
pub fn local_intersect(ray: &Ray) -> Vec<(f64, f64, f64)> {
    if ray.direction.y.abs() < EPSILON {
        return Vec::new();
    }
    let t = -ray.origin.y / ray.direction.y;
    vec![(t, 0.0, 0.0)]
}

pub fn local_normal_at(_local_point: Point) -> Vector {
    Vector::new(0.0, 1.0, 0.0)
}
