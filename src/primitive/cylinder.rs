use crate::bounds::BoundingBox;
use crate::point::Point;
use crate::ray::Ray;
use crate::vector::Vector;

const EPSILON: f64 = 1e-5;

pub fn bounds(min: f64, max: f64) -> BoundingBox {
    BoundingBox::new(Point::new(-1.0, min, -1.0), Point::new(1.0, max, 1.0))
}

fn in_cap(ray: &Ray, t: f64) -> bool {
    let x = ray.origin.x + t * ray.direction.x;
    let z = ray.origin.z + t * ray.direction.z;
    x * x + z * z <= 1.0
}

fn intersect_caps(ray: &Ray, min: f64, max: f64, closed: bool, out: &mut Vec<(f64, f64, f64)>) {
    if !closed || ray.direction.y.abs() < EPSILON {
        return;
    }

    let t = (min - ray.origin.y) / ray.direction.y;
    if in_cap(ray, t) {
        out.push((t, 0.0, 0.0));
    }

    let t = (max - ray.origin.y) / ray.direction.y;
    if in_cap(ray, t) {
        out.push((t, 0.0, 0.0));
    }
}

pub fn local_intersect(ray: &Ray, min: f64, max: f64, closed: bool) -> Vec<(f64, f64, f64)> {
    let mut xs = Vec::new();

    let a = ray.direction.x * ray.direction.x + ray.direction.z * ray.direction.z;
    if a.abs() >= EPSILON {
        let b = 2.0 * ray.origin.x * ray.direction.x + 2.0 * ray.origin.z * ray.direction.z;
        let c = ray.origin.x * ray.origin.x + ray.origin.z * ray.origin.z - 1.0;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            intersect_caps(ray, min, max, closed, &mut xs);
            return xs;
        }

        let sqrt_discriminant = discriminant.sqrt();
        let mut t0 = (-b - sqrt_discriminant) / (2.0 * a);
        let mut t1 = (-b + sqrt_discriminant) / (2.0 * a);
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }

        let y0 = ray.origin.y + t0 * ray.direction.y;
        if min < y0 && y0 < max {
            xs.push((t0, 0.0, 0.0));
        }

        let y1 = ray.origin.y + t1 * ray.direction.y;
        if min < y1 && y1 < max {
            xs.push((t1, 0.0, 0.0));
        }
    }

    intersect_caps(ray, min, max, closed, &mut xs);
    xs
}

pub fn local_normal_at(local_point: Point, min: f64, max: f64) -> Vector {
    let dist = local_point.x * local_point.x + local_point.z * local_point.z;

    if dist < 1.0 && local_point.y >= max - EPSILON {
        Vector::new(0.0, 1.0, 0.0)
    } else if dist < 1.0 && local_point.y <= min + EPSILON {
        Vector::new(0.0, -1.0, 0.0)
    } else {
        Vector::new(local_point.x, 0.0, local_point.z)
    }
}
