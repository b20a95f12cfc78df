use std::sync::atomic::{AtomicU64, Ordering};

use crate::color::Color;
use crate::light::PointLight;
use crate::point::Point;
use crate::primitive::{Hit, Primitive};
use crate::ray::Ray;
use crate::stats::Stats;
use crate::vector::Vector;

const EPSILON: f64 = 1e-5;

/// The scene: an unordered bag of primitives and point lights, plus the
/// atomic id generator and ray-statistics counters shared by the whole
/// render.
pub struct World {
    pub primitives: Vec<Primitive>,
    pub lights: Vec<PointLight>,
    pub stats: Stats,
    next_id: AtomicU64,
}

/// Everything `shade_hit` needs about a single ray/primitive hit, computed
/// once in `prepare_computations` so intersection math is never repeated.
struct HitComputations<'a> {
    primitive: &'a Primitive,
    object_point: Point,
    point: Point,
    over_point: Point,
    under_point: Point,
    eyev: Vector,
    normalv: Vector,
    reflectv: Vector,
    n1: f64,
    n2: f64,
}

impl World {
    pub fn new() -> World {
        World {
            primitives: Vec::new(),
            lights: Vec::new(),
            stats: Stats::new(),
            next_id: AtomicU64::new(0),
        }
    }

    /// Monotonically increasing unique id; safe under concurrent callers.
    pub fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    fn intersect(&self, ray: &Ray) -> Vec<Hit> {
        let mut xs: Vec<Hit> = self.primitives.iter().flat_map(|p| p.intersect(ray)).collect();
        xs.sort_by(|a, b| a.t.partial_cmp(&b.t).unwrap());
        xs
    }

    /// Entry point for a primary (eye) ray.
    pub fn color_at(&self, ray: &Ray, remaining: u32) -> Color {
        self.stats.inc_eye_ray();
        self.color_at_impl(ray, remaining)
    }

    fn color_at_impl(&self, ray: &Ray, remaining: u32) -> Color {
        let xs = self.intersect(ray);
        let hit = xs.iter().find(|h| h.t >= 0.0);
        match hit {
            None => Color::black(),
            Some(hit) => {
                let comps = self.prepare_computations(hit, ray, &xs);
                self.shade_hit(&comps, remaining)
            }
        }
    }

    fn prepare_computations<'a>(&self, hit: &Hit<'a>, ray: &Ray, xs: &[Hit<'a>]) -> HitComputations<'a> {
        let point = ray.position(hit.t);
        let eyev = -ray.direction;
        let mut normalv = hit.normal;
        if normalv.dot(eyev) < 0.0 {
            normalv = -normalv;
        }
        let reflectv = ray.direction.reflect(normalv);
        let over_point = point + normalv * EPSILON;
        let under_point = point - normalv * EPSILON;

        let (n1, n2) = refractive_indices(hit, xs);

        HitComputations {
            primitive: hit.primitive,
            object_point: hit.object_point,
            point,
            over_point,
            under_point,
            eyev,
            normalv,
            reflectv,
            n1,
            n2,
        }
    }

    fn shade_hit(&self, comps: &HitComputations, remaining: u32) -> Color {
        let material = &comps.primitive.material;

        let surface = self.lights.iter().fold(Color::black(), |acc, light| {
            let shadowed = self.is_shadowed(comps.over_point, light.position);
            acc + material.lighting(
                comps.object_point,
                light,
                comps.over_point,
                comps.eyev,
                comps.normalv,
                shadowed,
            )
        });

        let reflected = self.reflected_color(comps, remaining);
        let refracted = self.refracted_color(comps, remaining);

        if material.reflective > 0.0 && material.transparency > 0.0 {
            let reflectance = schlick(comps.n1, comps.n2, comps.eyev, comps.normalv);
            surface + reflected * reflectance + refracted * (1.0 - reflectance)
        } else {
            surface + reflected + refracted
        }
    }

    fn reflected_color(&self, comps: &HitComputations, remaining: u32) -> Color {
        if remaining == 0 || comps.primitive.material.reflective == 0.0 {
            return Color::black();
        }
        self.stats.inc_reflection_ray();
        let reflect_ray = Ray::new(comps.over_point, comps.reflectv);
        self.color_at_impl(&reflect_ray, remaining - 1) * comps.primitive.material.reflective
    }

    fn refracted_color(&self, comps: &HitComputations, remaining: u32) -> Color {
        if remaining == 0 || comps.primitive.material.transparency == 0.0 {
            return Color::black();
        }

        let n_ratio = comps.n1 / comps.n2;
        let cos_i = comps.eyev.dot(comps.normalv);
        let sin2_t = n_ratio * n_ratio * (1.0 - cos_i * cos_i);
        if sin2_t > 1.0 {
            return Color::black();
        }

        self.stats.inc_refraction_ray();
        let cos_t = (1.0 - sin2_t).sqrt();
        let direction = comps.normalv * (n_ratio * cos_i - cos_t) - comps.eyev * n_ratio;
        let refract_ray = Ray::new(comps.under_point, direction);
        self.color_at_impl(&refract_ray, remaining - 1) * comps.primitive.material.transparency
    }

    fn is_shadowed(&self, point: Point, light_position: Point) -> bool {
        self.stats.inc_shadow_ray();
        let v = light_position - point;
        let distance = v.magnitude();
        let direction = v.normalize();

        let r = Ray::new(point, direction);
        let xs = self.intersect(&r);
        match xs.iter().find(|h| h.t >= 0.0) {
            Some(h) => h.t < distance,
            None => false,
        }
    }
}

impl Default for World {
    fn default() -> World {
        World::new()
    }
}

/// Walks `xs` in `t` order maintaining a container stack by object identity,
/// returning the refractive indices on either side of `hit`.
fn refractive_indices(hit: &Hit, xs: &[Hit]) -> (f64, f64) {
    let mut containers: Vec<*const Primitive> = Vec::new();
    let mut n1 = 1.0;
    let mut n2 = 1.0;

    for x in xs {
        let is_hit = std::ptr::eq(x.primitive, hit.primitive) && x.t == hit.t;

        if is_hit {
            n1 = containers
                .last()
                .map(|&p| unsafe { (*p).material.refractive_index })
                .unwrap_or(1.0);
        }

        let ptr = x.primitive as *const Primitive;
        if let Some(pos) = containers.iter().position(|&p| p == ptr) {
            containers.remove(pos);
        } else {
            containers.push(ptr);
        }

        if is_hit {
            n2 = containers
                .last()
                .map(|&p| unsafe { (*p).material.refractive_index })
                .unwrap_or(1.0);
            break;
        }
    }

    (n1, n2)
}

/// Schlick's approximation of the Fresnel reflectance, with the internal
/// total-reflection cosine swap when the ray exits a denser medium.
fn schlick(n1: f64, n2: f64, eyev: Vector, normalv: Vector) -> f64 {
    let mut cos = eyev.dot(normalv);

    if n1 > n2 {
        let n = n1 / n2;
        let sin2_t = n * n * (1.0 - cos * cos);
        if sin2_t > 1.0 {
            return 1.0;
        }
        cos = (1.0 - sin2_t).sqrt();
    }

    let r0 = ((n1 - n2) / (n1 + n2)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cos).powi(5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use crate::matrix::Matrix4;
    use crate::pattern::Pattern;
    use crate::test_utils::ApproxEq;

    fn default_world() -> World {
        let mut w = World::new();
        w.lights.push(PointLight::new(Point::new(-10.0, 10.0, -10.0), Color::white()));

        let mut m1 = Material::new(Pattern::solid(Color::new(0.8, 1.0, 0.6)));
        m1.diffuse = 0.7;
        m1.specular = 0.2;
        let s1 = Primitive::sphere().with_material(m1);

        let s2 = Primitive::sphere().with_transform(Matrix4::scaling(Vector::new(0.5, 0.5, 0.5)));

        w.primitives.push(s1);
        w.primitives.push(s2);
        w
    }

    #[test]
    fn shading_an_intersection() {
        let w = default_world();
        let r = Ray::new(Point::new(0.0, 0.0, -5.0), Vector::new(0.0, 0.0, 1.0));
        let c = w.color_at(&r, 5);
        assert!(c.approx_eq(&Color::new(0.38066, 0.47583, 0.2855)));
    }

    #[test]
    fn shading_from_the_inside() {
        let mut w = default_world();
        w.lights[0] = PointLight::new(Point::new(0.0, 0.25, 0.0), Color::white());
        let r = Ray::new(Point::new(0.0, 0.0, 0.0), Vector::new(0.0, 0.0, 1.0));
        let c = w.color_at(&r, 5);
        assert!(c.approx_eq(&Color::new(0.90498, 0.90498, 0.90498)));
    }

    #[test]
    fn shade_hit_is_given_an_intersection_in_shadow() {
        let mut w = World::new();
        w.lights.push(PointLight::new(Point::new(0.0, 0.0, -10.0), Color::white()));
        w.primitives.push(Primitive::sphere());
        w.primitives
            .push(Primitive::sphere().with_transform(Matrix4::translation(Vector::new(0.0, 0.0, 10.0))));

        let r = Ray::new(Point::new(0.0, 0.0, 5.0), Vector::new(0.0, 0.0, 1.0));
        let c = w.color_at(&r, 5);
        assert!(c.approx_eq(&Color::new(0.1, 0.1, 0.1)));
    }

    #[test]
    fn refracted_color_of_opaque_surface_is_black() {
        let w = default_world();
        let r = Ray::new(Point::new(0.0, 0.0, -5.0), Vector::new(0.0, 0.0, 1.0));
        let xs = w.intersect(&r);
        let hit = xs.iter().find(|h| h.t >= 0.0).unwrap();
        let comps = w.prepare_computations(hit, &r, &xs);
        let c = w.refracted_color(&comps, 5);
        assert_eq!(Color::black(), c);
    }

    #[test]
    fn reflected_color_for_nonreflective_material() {
        let mut w = default_world();
        w.primitives[1].material.ambient = 1.0;
        let r = Ray::new(Point::origin(), Vector::new(0.0, 0.0, 1.0));
        let xs = w.intersect(&r);
        let hit = &xs[1];
        let comps = w.prepare_computations(hit, &r, &xs);
        let c = w.reflected_color(&comps, 5);
        assert_eq!(Color::black(), c);
    }

    fn reflective_plane_world() -> (World, Ray) {
        let mut w = default_world();
        let mut m = Material::new(Pattern::solid(Color::white()));
        m.reflective = 0.5;
        let shape = Primitive::plane()
            .with_transform(Matrix4::translation(Vector::new(0.0, -1.0, 0.0)))
            .with_material(m);
        w.primitives.push(shape);

        let sqrt2_2 = 2.0_f64.sqrt() / 2.0;
        let r = Ray::new(Point::new(0.0, 0.0, -3.0), Vector::new(0.0, -sqrt2_2, sqrt2_2));
        (w, r)
    }

    #[test]
    fn reflected_color_for_reflective_material() {
        let (w, r) = reflective_plane_world();
        let xs = w.intersect(&r);
        let hit = xs.iter().find(|h| h.t >= 0.0).unwrap();
        let comps = w.prepare_computations(hit, &r, &xs);
        let c = w.reflected_color(&comps, 5);
        assert!(c.approx_eq(&Color::new(0.19032, 0.2379, 0.14274)));
    }

    #[test]
    fn reflected_color_at_maximum_recursive_depth() {
        let (w, r) = reflective_plane_world();
        let xs = w.intersect(&r);
        let hit = xs.iter().find(|h| h.t >= 0.0).unwrap();
        let comps = w.prepare_computations(hit, &r, &xs);
        let c = w.reflected_color(&comps, 0);
        assert_eq!(Color::black(), c);
    }

    #[test]
    fn shade_hit_with_reflective_material() {
        let (w, r) = reflective_plane_world();
        let xs = w.intersect(&r);
        let hit = xs.iter().find(|h| h.t >= 0.0).unwrap();
        let comps = w.prepare_computations(hit, &r, &xs);
        let c = w.shade_hit(&comps, 5);
        assert!(c.approx_eq(&Color::new(0.87677, 0.92436, 0.82918)));
    }

    fn glass_sphere() -> Primitive {
        let mut m = Material::new(Pattern::solid(Color::white()));
        m.transparency = 1.0;
        m.refractive_index = 1.5;
        Primitive::sphere().with_material(m)
    }

    #[test]
    fn schlick_under_total_internal_reflection() {
        let mut w = World::new();
        w.primitives.push(glass_sphere());
        let sqrt2_2 = 2.0_f64.sqrt() / 2.0;
        let r = Ray::new(Point::new(0.0, 0.0, sqrt2_2), Vector::new(0.0, 1.0, 0.0));
        let xs = w.intersect(&r);
        assert_eq!(2, xs.len());
        let comps = w.prepare_computations(&xs[1], &r, &xs);
        let reflectance = schlick(comps.n1, comps.n2, comps.eyev, comps.normalv);
        assert!(reflectance.approx_eq(&1.0));
    }

    #[test]
    fn schlick_with_a_perpendicular_ray() {
        let mut w = World::new();
        w.primitives.push(glass_sphere());
        let r = Ray::new(Point::origin(), Vector::new(0.0, 1.0, 0.0));
        let xs = w.intersect(&r);
        assert_eq!(2, xs.len());
        let comps = w.prepare_computations(&xs[1], &r, &xs);
        let reflectance = schlick(comps.n1, comps.n2, comps.eyev, comps.normalv);
        assert!((reflectance - 0.04).abs() < 1e-5);
    }

    #[test]
    fn schlick_with_small_angle_and_n2_greater_than_n1() {
        let mut w = World::new();
        w.primitives.push(glass_sphere());
        let r = Ray::new(Point::new(0.0, 0.99, -2.0), Vector::new(0.0, 0.0, 1.0));
        let xs = w.intersect(&r);
        assert_eq!(2, xs.len());
        let comps = w.prepare_computations(&xs[0], &r, &xs);
        let reflectance = schlick(comps.n1, comps.n2, comps.eyev, comps.normalv);
        assert!((reflectance - 0.48873).abs() < 1e-4);
    }

    #[test]
    fn shade_hit_with_reflective_and_transparent_material() {
        let mut w = default_world();
        let sqrt2_2 = 2.0_f64.sqrt() / 2.0;
        let r = Ray::new(Point::new(0.0, 0.0, -3.0), Vector::new(0.0, -sqrt2_2, sqrt2_2));

        let mut floor_material = Material::new(Pattern::solid(Color::white()));
        floor_material.reflective = 0.5;
        floor_material.transparency = 0.5;
        floor_material.refractive_index = 1.5;
        let floor = Primitive::plane()
            .with_transform(Matrix4::translation(Vector::new(0.0, -1.0, 0.0)))
            .with_material(floor_material);
        w.primitives.push(floor);

        let mut ball_material = Material::new(Pattern::solid(Color::new(1.0, 0.0, 0.0)));
        ball_material.ambient = 0.5;
        let ball = Primitive::sphere()
            .with_transform(Matrix4::translation(Vector::new(0.0, -3.5, -0.5)))
            .with_material(ball_material);
        w.primitives.push(ball);

        let xs = w.intersect(&r);
        let hit = xs.iter().find(|h| h.t >= 0.0).unwrap();
        let comps = w.prepare_computations(hit, &r, &xs);
        let c = w.shade_hit(&comps, 5);
        assert!(c.approx_eq(&Color::new(0.93391, 0.69643, 0.69243)));
    }

    #[test]
    fn the_refracted_color_with_a_refracted_ray() {
        let mut w = World::new();
        w.lights.push(PointLight::new(Point::new(-10.0, 10.0, -10.0), Color::white()));

        let mut outer_material = Material::new(Pattern::test());
        outer_material.ambient = 1.0;
        let outer = Primitive::sphere().with_material(outer_material);

        let mut inner_material = Material::new(Pattern::solid(Color::white()));
        inner_material.transparency = 1.0;
        inner_material.refractive_index = 1.5;
        let inner = Primitive::sphere()
            .with_transform(Matrix4::scaling(Vector::new(0.5, 0.5, 0.5)))
            .with_material(inner_material);

        w.primitives.push(outer);
        w.primitives.push(inner);

        let r = Ray::new(Point::new(0.0, 0.0, 0.1), Vector::new(0.0, 1.0, 0.0));
        let xs = w.intersect(&r);
        assert_eq!(4, xs.len());
        let comps = w.prepare_computations(&xs[2], &r, &xs);
        let c = w.refracted_color(&comps, 5);
        assert!(c.approx_eq(&Color::new(0.0, 0.99888, 0.04725)));
    }
}
