use crate::bounds::BoundingBox;
use crate::point::Point;
use crate::ray::Ray;
use crate::vector::Vector;

const EPSILON: f64 = 1e-5;

pub fn bounds(p1: Point, p2: Point, p3: Point) -> BoundingBox {
    BoundingBox::empty()
        .with_point(p1)
        .with_point(p2)
        .with_point(p3)
}

pub fn normal(p1: Point, p2: Point, p3: Point) -> Vector {
    let e1 = p2 - p1;
    let e2 = p3 - p1;
    e2.cross(e1).normalize()
}

/// Moller-Trumbore intersection. Returns `(t, u, v)` triples; `u`/`v` are
/// the barycentric weights of `p2`/`p3`, used by smooth triangles to
/// interpolate vertex normals.
pub fn local_intersect(ray: &Ray, p1: Point, e1: Vector, e2: Vector) -> Vec<(f64, f64, f64)> {
    let dir_cross_e2 = ray.direction.cross(e2);
    let det = e1.dot(dir_cross_e2);
    if det.abs() < EPSILON {
        return Vec::new();
    }

    let f = 1.0 / det;
    let p1_to_origin = ray.origin - p1;
    let u = f * p1_to_origin.dot(dir_cross_e2);
    if !(0.0..=1.0).contains(&u) {
        return Vec::new();
    }

    let origin_cross_e1 = p1_to_origin.cross(e1);
    let v = f * ray.direction.dot(origin_cross_e1);
    if v < 0.0 || u + v > 1.0 {
        return Vec::new();
    }

    let t = f * e2.dot(origin_cross_e1);
    vec![(t, u, v)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> (Point, Point, Point, Vector, Vector) {
        let p1 = Point::new(0.0, 1.0, 0.0);
        let p2 = Point::new(-1.0, 0.0, 0.0);
        let p3 = Point::new(1.0, 0.0, 0.0);
        let e1 = p2 - p1;
        let e2 = p3 - p1;
        (p1, p2, p3, e1, e2)
    }

    #[test]
    fn constructing_a_triangle_computes_normal() {
        let (p1, p2, p3, _, _) = triangle();
        let n = normal(p1, p2, p3);
        assert_eq!(Vector::new(0.0, 0.0, -1.0), n);
    }

    #[test]
    fn ray_misses_parallel_triangle() {
        let (p1, _, _, e1, e2) = triangle();
        let r = Ray::new(Point::new(0.0, -1.0, -2.0), Vector::new(0.0, 1.0, 0.0));
        assert!(local_intersect(&r, p1, e1, e2).is_empty());
    }

    #[test]
    fn ray_misses_each_edge() {
        let (p1, _, _, e1, e2) = triangle();
        let misses = [
            Ray::new(Point::new(1.0, 1.0, -2.0), Vector::new(0.0, 0.0, 1.0)),
            Ray::new(Point::new(-1.0, 1.0, -2.0), Vector::new(0.0, 0.0, 1.0)),
            Ray::new(Point::new(0.0, -1.0, -2.0), Vector::new(0.0, 0.0, 1.0)),
        ];
        for r in misses {
            assert!(local_intersect(&r, p1, e1, e2).is_empty());
        }
    }

    #[test]
    fn ray_strikes_triangle() {
        let (p1, _, _, e1, e2) = triangle();
        let r = Ray::new(Point::new(0.0, 0.5, -2.0), Vector::new(0.0, 0.0, 1.0));
        let xs = local_intersect(&r, p1, e1, e2);
        assert_eq!(1, xs.len());
        assert_eq!(2.0, xs[0].0);
    }
}
