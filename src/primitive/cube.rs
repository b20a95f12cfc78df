use crate::bounds::BoundingBox;
use crate::point::Point;
use crate::ray::Ray;
use crate::vector::Vector;

pub fn bounds() -> BoundingBox {
    BoundingBox::new(Point::new(-1.0, -1.0, -1.0), Point::new(1.0, 1.0, 1.0))
}

fn check_axis(origin: f64, direction: f64) -> (f64, f64) {
    let tmin_numerator = -1.0 - origin;
    let tmax_numerator = 1.0 - origin;

    let (tmin, tmax) = if direction.abs() >= f64::EPSILON {
        (tmin_numerator / direction, tmax_numerator / direction)
    } else {
        (tmin_numerator * f64::INFINITY, tmax_numerator * f64::INFINITY)
    };

    if tmin > tmax {
        (tmax, tmin)
    } else {
        (tmin, tmax)
    }
}

pub fn local_intersect(ray: &Ray) -> Vec<(f64, f64, f64)> {
    let (xtmin, xtmax) = check_axis(ray.origin.x, ray.direction.x);
    let (ytmin, ytmax) = check_axis(ray.origin.y, ray.direction.y);
    let (ztmin, ztmax) = check_axis(ray.origin.z, ray.direction.z);

    let tmin = xtmin.max(ytmin).max(ztmin);
    let tmax = xtmax.min(ytmax).min(ztmax);

    if tmin > tmax {
        return Vec::new();
    }
    vec![(tmin, 0.0, 0.0), (tmax, 0.0, 0.0)]
}

pub fn local_normal_at(local_point: Point) -> Vector {
    let ax = local_point.x.abs();
    let ay = local_point.y.abs();
    let az = local_point.z.abs();
    let maxc = ax.max(ay).max(az);

    if maxc == ax {
        Vector::new(local_point.x, 0.0, 0.0)
    } else if maxc == ay {
        Vector::new(0.0, local_point.y, 0.0)
    } else {
        Vector::new(0.0, 0.0, local_point.z)
    }
}
