use crate::bounds::BoundingBox;
use crate::point::Point;
use crate::ray::Ray;
use crate::vector::Vector;

pub fn bounds() -> BoundingBox {
    BoundingBox::new(Point::new(-1.0, -1.0, -1.0), Point::new(1.0, 1.0, 1.0))
}

/// Solves `|O + tD|^2 = 1` for the unit sphere at the origin.
pub fn local_intersect(ray: &Ray) -> Vec<(f64, f64, f64)> {
    let sphere_to_ray = ray.origin - Point::origin();
    let a = ray.direction.dot(ray.direction);
    let b = 2.0 * ray.direction.dot(sphere_to_ray);
    let c = sphere_to_ray.dot(sphere_to_ray) - 1.0;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Vec::new();
    }

    let sqrt_discriminant = discriminant.sqrt();
    let t0 = (-b - sqrt_discriminant) / (2.0 * a);
    let t1 = (-b + sqrt_discriminant) / (2.0 * a);
    vec![(t0, 0.0, 0.0), (t1, 0.0, 0.0)]
}

pub fn local_normal_at(local_point: Point) -> Vector {
    local_point - Point::origin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_intersects_sphere_at_two_points() {
        let r = Ray::new(Point::new(0.0, 0.0, -5.0), Vector::new(0.0, 0.0, 1.0));
        let xs = local_intersect(&r);
        assert_eq!(2, xs.len());
        assert_eq!(4.0, xs[0].0);
        assert_eq!(6.0, xs[1].0);
    }

    #[test]
    fn ray_misses_sphere() {
        let r = Ray::new(Point::new(0.0, 2.0, -5.0), Vector::new(0.0, 0.0, 1.0));
        assert!(local_intersect(&r).is_empty());
    }

    #[test]
    fn normal_on_sphere_at_nonaxial_point() {
        let v = 3.0_f64.sqrt() / 3.0;
        let n = local_normal_at(Point::new(v, v, v));
        assert!(n.approx_eq(&n.normalize()));
    }
}
