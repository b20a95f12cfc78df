use whitted::canvas::Canvas;
use whitted::color::Color;
use whitted::light::PointLight;
use whitted::material::Material;
use whitted::pattern::Pattern;
use whitted::point::Point;
use whitted::primitive::Primitive;
use whitted::ray::Ray;

/// Casts rays at a single unit sphere from a fixed eye point and shades
/// whatever the ray hits, with no camera and no recursion — the smallest
/// possible exercise of `Material::lighting` against a real primitive.
fn main() {
    let canvas_pixels = 800usize;
    let mut canvas = Canvas::new(canvas_pixels, canvas_pixels);

    let sphere =
        Primitive::sphere().with_material(Material::new(Pattern::solid(Color::new(1.0, 0.2, 1.0))));

    let light = PointLight::new(Point::new(-10.0, 10.0, -10.0), Color::white());

    let ray_origin = Point::new(0.0, 0.0, -10.0);
    let wall_size = 7.0;
    let wall_z = 10.0;
    let pixel_size = wall_size / canvas_pixels as f64;
    let half = wall_size / 2.0;

    for y in 0..canvas_pixels {
        let world_y = half - pixel_size * y as f64;
        for x in 0..canvas_pixels {
            let world_x = -half + pixel_size * x as f64;

            let wall_position = Point::new(world_x, world_y, wall_z);
            let ray = Ray::new(ray_origin, (wall_position - ray_origin).normalize());

            let hits = sphere.intersect(&ray);
            if let Some(hit) = hits.into_iter().filter(|h| h.t >= 0.0).min_by(|a, b| a.t.partial_cmp(&b.t).unwrap())
            {
                let point = ray.position(hit.t);
                let eye = -ray.direction;
                let color =
                    sphere.material.lighting(hit.object_point, &light, point, eye, hit.normal, false);
                canvas.write_pixel(x, y, color);
            }
        }
    }

    std::fs::write("sphere.ppm", canvas.to_ppm()).expect("could not write sphere.ppm");
}
