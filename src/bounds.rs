use std::f64;

use crate::matrix::Matrix4;
use crate::point::Point;
use crate::ray::Ray;

/// An axis-aligned bounding box. `Primitive::bounds` returns one in object
/// space; `Group` caches the union of its children's bounds, transformed
/// into the group's own object space, so a ray that misses a group's box
/// never has to test any of its children.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    pub fn new(min: Point, max: Point) -> BoundingBox {
        BoundingBox { min, max }
    }

    /// The box containing nothing: min/max at opposing infinities so that
    /// unioning it with any other box yields that box unchanged.
    pub fn empty() -> BoundingBox {
        BoundingBox::new(
            Point::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        )
    }

    pub fn with_point(mut self, p: Point) -> BoundingBox {
        self.min = Point::new(self.min.x.min(p.x), self.min.y.min(p.y), self.min.z.min(p.z));
        self.max = Point::new(self.max.x.max(p.x), self.max.y.max(p.y), self.max.z.max(p.z));
        self
    }

    pub fn union(self, other: BoundingBox) -> BoundingBox {
        self.with_point(other.min).with_point(other.max)
    }

    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        self.contains_point(other.min) && self.contains_point(other.max)
    }

    pub fn is_infinite(&self) -> bool {
        self.min.x.is_infinite()
            || self.min.y.is_infinite()
            || self.min.z.is_infinite()
            || self.max.x.is_infinite()
            || self.max.y.is_infinite()
            || self.max.z.is_infinite()
    }

    /// The tight box containing all 8 corners of `self` transformed by `m`.
    /// Used when a `Group` caches the world-space (well, parent-space)
    /// bounds of a child whose own transform rotates or shears it.
    pub fn transform(&self, m: Matrix4) -> BoundingBox {
        let corners = [
            Point::new(self.min.x, self.min.y, self.min.z),
            Point::new(self.min.x, self.min.y, self.max.z),
            Point::new(self.min.x, self.max.y, self.min.z),
            Point::new(self.min.x, self.max.y, self.max.z),
            Point::new(self.max.x, self.min.y, self.min.z),
            Point::new(self.max.x, self.min.y, self.max.z),
            Point::new(self.max.x, self.max.y, self.min.z),
            Point::new(self.max.x, self.max.y, self.max.z),
        ];
        corners
            .iter()
            .map(|&c| c * m)
            .fold(BoundingBox::empty(), |acc, c| acc.with_point(c))
    }

    /// Slab test: true if `ray` intersects the box at all. Uses the ray's
    /// cached `inverse_direction`/`sign` so this is a handful of
    /// multiply-subtracts with no division.
    pub fn intersect(&self, ray: &Ray) -> bool {
        let bounds = [self.min, self.max];

        let mut tmin = (bounds[ray.sign[0]].x - ray.origin.x) * ray.inverse_direction.x;
        let mut tmax = (bounds[1 - ray.sign[0]].x - ray.origin.x) * ray.inverse_direction.x;
        let tymin = (bounds[ray.sign[1]].y - ray.origin.y) * ray.inverse_direction.y;
        let tymax = (bounds[1 - ray.sign[1]].y - ray.origin.y) * ray.inverse_direction.y;

        if tmin > tymax || tymin > tmax {
            return false;
        }
        if tymin > tmin {
            tmin = tymin;
        }
        if tymax < tmax {
            tmax = tymax;
        }

        let tzmin = (bounds[ray.sign[2]].z - ray.origin.z) * ray.inverse_direction.z;
        let tzmax = (bounds[1 - ray.sign[2]].z - ray.origin.z) * ray.inverse_direction.z;

        if tmin > tzmax || tzmin > tmax {
            return false;
        }
        if tzmin > tmin {
            tmin = tzmin;
        }
        if tzmax < tmax {
            tmax = tzmax;
        }

        tmax >= 0.0 && tmin <= tmax
    }
}
