use crate::color::Color;
use crate::light::PointLight;
use crate::pattern::Pattern;
use crate::point::Point;
use crate::vector::Vector;

#[derive(Debug, Clone, Copy)]
pub struct Material {
    pub pattern: Pattern,
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    pub shininess: f64,
    pub reflective: f64,
    pub transparency: f64,
    pub refractive_index: f64,
}

impl Material {
    pub fn new(pattern: Pattern) -> Material {
        Material {
            pattern,
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.0,
            reflective: 0.0,
            transparency: 0.0,
            refractive_index: 1.0,
        }
    }

    /// Phong shading at a single hit point for a single light. `object_point`
    /// is the hit in the primitive's own object space (used for pattern
    /// sampling); `point` is the same hit in world space (used for the
    /// light-vector calculation). The caller is expected to have already
    /// resolved `in_shadow` (spec.md §4.6 step 3) before calling this.
    pub fn lighting(
        &self,
        object_point: Point,
        light: &PointLight,
        point: Point,
        eye: Vector,
        normal: Vector,
        in_shadow: bool,
    ) -> Color {
        let base = self.pattern.color_at_object(object_point);
        let effective_color = base * light.intensity;
        let ambient = effective_color * self.ambient;

        if in_shadow {
            return ambient;
        }

        let lightv = (light.position - point).normalize();
        let light_dot_normal = lightv.dot(normal);

        let (diffuse, specular) = if light_dot_normal < 0.0 {
            (Color::black(), Color::black())
        } else {
            let diffuse = effective_color * self.diffuse * light_dot_normal;

            let reflectv = (-lightv).reflect(normal);
            let reflect_dot_eye = reflectv.dot(eye);

            let specular = if reflect_dot_eye <= 0.0 {
                Color::black()
            } else {
                let factor = reflect_dot_eye.powf(self.shininess);
                light.intensity * self.specular * factor
            };

            (diffuse, specular)
        };

        ambient + diffuse + specular
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_material() -> Material {
        Material::new(Pattern::solid(Color::white()))
    }

    #[test]
    fn default_material_has_spec_defaults() {
        let m = default_material();
        assert_eq!(0.1, m.ambient);
        assert_eq!(0.9, m.diffuse);
        assert_eq!(0.9, m.specular);
        assert_eq!(200.0, m.shininess);
        assert_eq!(0.0, m.reflective);
        assert_eq!(0.0, m.transparency);
        assert_eq!(1.0, m.refractive_index);
    }

    #[test]
    fn lighting_with_eye_between_light_and_surface() {
        let m = default_material();
        let position = Point::origin();
        let eye = Vector::new(0.0, 0.0, -1.0);
        let normal = Vector::new(0.0, 0.0, -1.0);
        let light = PointLight::new(Point::new(0.0, 0.0, -10.0), Color::white());
        let result = m.lighting(position, &light, position, eye, normal, false);
        assert_eq!(Color::new(1.9, 1.9, 1.9), result);
    }

    #[test]
    fn lighting_with_eye_offset_45_degrees() {
        let m = default_material();
        let position = Point::origin();
        let sqrt2_2 = 2.0_f64.sqrt() / 2.0;
        let eye = Vector::new(0.0, sqrt2_2, -sqrt2_2);
        let normal = Vector::new(0.0, 0.0, -1.0);
        let light = PointLight::new(Point::new(0.0, 0.0, -10.0), Color::white());
        let result = m.lighting(position, &light, position, eye, normal, false);
        assert_eq!(Color::new(1.0, 1.0, 1.0), result);
    }

    #[test]
    fn lighting_with_light_behind_surface() {
        let m = default_material();
        let position = Point::origin();
        let eye = Vector::new(0.0, 0.0, -1.0);
        let normal = Vector::new(0.0, 0.0, -1.0);
        let light = PointLight::new(Point::new(0.0, 0.0, 10.0), Color::white());
        let result = m.lighting(position, &light, position, eye, normal, false);
        assert_eq!(Color::new(0.1, 0.1, 0.1), result);
    }

    #[test]
    fn lighting_with_surface_in_shadow() {
        let m = default_material();
        let position = Point::origin();
        let eye = Vector::new(0.0, 0.0, -1.0);
        let normal = Vector::new(0.0, 0.0, -1.0);
        let light = PointLight::new(Point::new(0.0, 0.0, -10.0), Color::white());
        let result = m.lighting(position, &light, position, eye, normal, true);
        assert_eq!(Color::new(0.1, 0.1, 0.1), result);
    }
}
