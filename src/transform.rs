use crate::matrix::Matrix4;
use crate::point::Point;
use crate::vector::Vector;

/// A fluent builder over `Matrix4`, composing transforms in application
/// order (`Transform::identity().translate(...).scale(...)` scales first,
/// then translates — each call left-multiplies so the step named first in
/// the chain is applied first to a point).
#[derive(Debug, Clone, Copy)]
pub struct Transform(Matrix4);

impl Transform {
    pub fn identity() -> Transform {
        Transform(Matrix4::identity())
    }

    pub fn translate(self, x: f64, y: f64, z: f64) -> Transform {
        Transform(self.0 * Matrix4::translation(Vector::new(x, y, z)))
    }

    pub fn scale(self, x: f64, y: f64, z: f64) -> Transform {
        Transform(self.0 * Matrix4::scaling(Vector::new(x, y, z)))
    }

    pub fn rotate_x(self, radians: f64) -> Transform {
        Transform(self.0 * Matrix4::rotation_x(radians))
    }

    pub fn rotate_y(self, radians: f64) -> Transform {
        Transform(self.0 * Matrix4::rotation_y(radians))
    }

    pub fn rotate_z(self, radians: f64) -> Transform {
        Transform(self.0 * Matrix4::rotation_z(radians))
    }

    pub fn shear(self, xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Transform {
        Transform(self.0 * Matrix4::shearing(xy, xz, yx, yz, zx, zy))
    }

    pub fn matrix(self) -> Matrix4 {
        self.0
    }
}

/// Builds the world-to-camera transform for a camera positioned at `from`,
/// aimed at `to`, with `up` defining the roll.
pub fn view_transform(from: Point, to: Point, up: Vector) -> Matrix4 {
    let forward = (to - from).normalize();
    let upn = up.normalize();
    let left = forward.cross(upn);
    let true_up = left.cross(forward);
    let orientation = Matrix4::new([
        [left.x, true_up.x, -forward.x, 0.0],
        [left.y, true_up.y, -forward.y, 0.0],
        [left.z, true_up.z, -forward.z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    Matrix4::translation(Point::origin() - from) * orientation
}
