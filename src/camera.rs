use rayon::prelude::*;

use crate::canvas::Canvas;
use crate::matrix::Matrix4;
use crate::point::Point;
use crate::ray::Ray;
use crate::world::World;

/// Pre-computes the half-width/half-height/pixel-size triple once per
/// camera so `ray_for_pixel` is a handful of multiplies per call.
pub struct Camera {
    hsize: usize,
    vsize: usize,
    transform: Matrix4,
    inverse_transform: Matrix4,
    pixel_size: f64,
    half_width: f64,
    half_height: f64,
}

impl Camera {
    pub fn new(hsize: usize, vsize: usize, field_of_view: f64) -> Camera {
        let half_view = (field_of_view / 2.0).tan();
        let aspect = hsize as f64 / vsize as f64;

        let (half_width, half_height) = if aspect >= 1.0 {
            (half_view, half_view / aspect)
        } else {
            (half_view * aspect, half_view)
        };

        let pixel_size = half_width * 2.0 / hsize as f64;

        Camera {
            hsize,
            vsize,
            transform: Matrix4::identity(),
            inverse_transform: Matrix4::identity(),
            pixel_size,
            half_width,
            half_height,
        }
    }

    pub fn with_transform(mut self, transform: Matrix4) -> Camera {
        self.inverse_transform = transform.inverse();
        self.transform = transform;
        self
    }

    pub fn hsize(&self) -> usize {
        self.hsize
    }

    pub fn vsize(&self) -> usize {
        self.vsize
    }

    pub fn ray_for_pixel(&self, px: usize, py: usize) -> Ray {
        let x_offset = (px as f64 + 0.5) * self.pixel_size;
        let y_offset = (py as f64 + 0.5) * self.pixel_size;

        let world_x = self.half_width - x_offset;
        let world_y = self.half_height - y_offset;

        let pixel = Point::new(world_x, world_y, -1.0) * self.inverse_transform;
        let origin = Point::origin() * self.inverse_transform;
        let direction = (pixel - origin).normalize();

        Ray::new(origin, direction)
    }

    /// Renders `world` into a freshly allocated canvas. Rows are independent
    /// so rendering is data-parallel over `[0, vsize)`, matching the
    /// teacher's row-parallel `par_iter_mut` render loop.
    pub fn render(&self, world: &World) -> Canvas {
        let mut canvas = Canvas::new(self.hsize, self.vsize);
        let hsize = self.hsize;

        let mut rows: Vec<Vec<crate::color::Color>> = (0..self.vsize).map(|_| vec![crate::color::Color::black(); hsize]).collect();

        rows.par_iter_mut().enumerate().for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                let ray = self.ray_for_pixel(x, y);
                *pixel = world.color_at(&ray, 5);
            }
        });

        for (y, row) in rows.into_iter().enumerate() {
            for (x, color) in row.into_iter().enumerate() {
                canvas.write_pixel(x, y, color);
            }
        }

        canvas
    }
}
