use crate::matrix::Matrix4;
use crate::point::Point;
use crate::vector::Vector;

/// An infinite ray `origin + t * direction`. `inverse_direction` and `sign`
/// are cached at construction so `BoundingBox`/primitive slab tests don't
/// recompute a division per axis per intersection test.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point,
    pub direction: Vector,
    pub inverse_direction: Vector,
    pub sign: [usize; 3],
}

impl Ray {
    pub fn new(origin: Point, direction: Vector) -> Ray {
        let inverse_direction = Vector::new(1.0 / direction.x, 1.0 / direction.y, 1.0 / direction.z);
        Ray {
            origin,
            direction,
            inverse_direction,
            sign: inverse_direction.sign(),
        }
    }

    pub fn position(&self, t: f64) -> Point {
        self.origin + self.direction * t
    }

    /// Transforms the ray by `m`. Direction is **not** renormalized: an
    /// un-normalized direction keeps a hit's `t` consistent with the ray that
    /// produced it even through several nested `Group` transforms, so a
    /// `Primitive::intersect` never has to rescale `t` on the way back out.
    pub fn transform(&self, m: Matrix4) -> Ray {
        Ray::new(self.origin * m, self.direction * m)
    }
}
