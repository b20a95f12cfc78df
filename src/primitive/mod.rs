mod cone;
mod cube;
mod cylinder;
mod plane;
mod sphere;
mod triangle;

use crate::bounds::BoundingBox;
use crate::material::Material;
use crate::matrix::Matrix4;
use crate::pattern::Pattern;
use crate::point::Point;
use crate::ray::Ray;
use crate::vector::Vector;

/// The closed set of geometric primitives. `Group` is the only variant that
/// recurses: its children are owned by value, so there is no parent
/// back-pointer — `Primitive::intersect` carries the accumulated inverse
/// transform down through the recursion instead.
#[derive(Debug, Clone)]
pub enum Shape {
    Sphere,
    Plane,
    Cube,
    Cylinder { min: f64, max: f64, closed: bool },
    Cone { min: f64, max: f64, closed: bool },
    Triangle { p1: Point, p2: Point, p3: Point, e1: Vector, e2: Vector, normal: Vector },
    SmoothTriangle {
        p1: Point,
        p2: Point,
        p3: Point,
        n1: Vector,
        n2: Vector,
        n3: Vector,
        e1: Vector,
        e2: Vector,
    },
    Group(Vec<Primitive>),
}

#[derive(Debug, Clone)]
pub struct Primitive {
    pub shape: Shape,
    pub material: Material,
    pub transform: Matrix4,
    pub inverse: Matrix4,
    pub bounds: BoundingBox,
}

/// A ray/primitive intersection. `object_point` is in the *leaf's own*
/// object space — exactly what `Material::lighting`/`Pattern` need for
/// pattern-space sampling, with no further conversion required.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    pub t: f64,
    pub u: f64,
    pub v: f64,
    pub normal: Vector,
    pub object_point: Point,
    pub primitive: &'a Primitive,
}

impl Primitive {
    fn new(shape: Shape, bounds: BoundingBox) -> Primitive {
        Primitive {
            shape,
            material: Material::new(Pattern::solid(crate::color::Color::white())),
            transform: Matrix4::identity(),
            inverse: Matrix4::identity(),
            bounds,
        }
    }

    pub fn sphere() -> Primitive {
        Primitive::new(Shape::Sphere, sphere::bounds())
    }

    pub fn plane() -> Primitive {
        Primitive::new(Shape::Plane, plane::bounds())
    }

    pub fn cube() -> Primitive {
        Primitive::new(Shape::Cube, cube::bounds())
    }

    pub fn cylinder(min: f64, max: f64, closed: bool) -> Primitive {
        Primitive::new(Shape::Cylinder { min, max, closed }, cylinder::bounds(min, max))
    }

    pub fn cone(min: f64, max: f64, closed: bool) -> Primitive {
        Primitive::new(Shape::Cone { min, max, closed }, cone::bounds(min, max))
    }

    pub fn triangle(p1: Point, p2: Point, p3: Point) -> Primitive {
        let e1 = p2 - p1;
        let e2 = p3 - p1;
        let normal = triangle::normal(p1, p2, p3);
        Primitive::new(
            Shape::Triangle { p1, p2, p3, e1, e2, normal },
            triangle::bounds(p1, p2, p3),
        )
    }

    pub fn smooth_triangle(p1: Point, p2: Point, p3: Point, n1: Vector, n2: Vector, n3: Vector) -> Primitive {
        let e1 = p2 - p1;
        let e2 = p3 - p1;
        Primitive::new(
            Shape::SmoothTriangle { p1, p2, p3, n1, n2, n3, e1, e2 },
            triangle::bounds(p1, p2, p3),
        )
    }

    /// Builds a group from its children. Panics if any child's own
    /// (transformed) bounds are infinite — adding an unbounded primitive to
    /// a group is a precondition error, since the group could never cache a
    /// finite bounding box to early-out ray tests against.
    pub fn group(children: Vec<Primitive>) -> Primitive {
        let mut bounds = BoundingBox::empty();
        for child in &children {
            let child_bounds = child.bounds.transform(child.transform);
            assert!(
                !child_bounds.is_infinite(),
                "cannot add a primitive with infinite bounds to a group"
            );
            bounds = bounds.union(child_bounds);
        }
        Primitive::new(Shape::Group(children), bounds)
    }

    pub fn with_transform(mut self, transform: Matrix4) -> Primitive {
        self.inverse = transform.inverse();
        self.transform = transform;
        self
    }

    pub fn with_material(mut self, material: Material) -> Primitive {
        self.material = material;
        self
    }

    /// Intersects `ray` (given in this primitive's parent space) against
    /// this primitive and, recursively, its children. Every hit's normal is
    /// converted up exactly one transform level before returning, by
    /// `(inverse)^T`, regardless of whether this frame is a leaf or a
    /// `Group` — the conversion composes correctly across arbitrarily deep
    /// nesting as the recursion unwinds.
    pub fn intersect<'a>(&'a self, ray: &Ray) -> Vec<Hit<'a>> {
        let local_ray = ray.transform(self.inverse);

        let mut hits = match &self.shape {
            Shape::Group(children) => {
                if !self.bounds.intersect(&local_ray) {
                    Vec::new()
                } else {
                    children.iter().flat_map(|c| c.intersect(&local_ray)).collect()
                }
            }
            Shape::Sphere => sphere::local_intersect(&local_ray)
                .into_iter()
                .map(|(t, u, v)| {
                    let object_point = local_ray.position(t);
                    let normal = sphere::local_normal_at(object_point);
                    (t, u, v, normal, object_point)
                })
                .collect(),
            Shape::Plane => plane::local_intersect(&local_ray)
                .into_iter()
                .map(|(t, u, v)| {
                    let object_point = local_ray.position(t);
                    let normal = plane::local_normal_at(object_point);
                    (t, u, v, normal, object_point)
                })
                .collect(),
            Shape::Cube => cube::local_intersect(&local_ray)
                .into_iter()
                .map(|(t, u, v)| {
                    let object_point = local_ray.position(t);
                    let normal = cube::local_normal_at(object_point);
                    (t, u, v, normal, object_point)
                })
                .collect(),
            Shape::Cylinder { min, max, closed } => cylinder::local_intersect(&local_ray, *min, *max, *closed)
                .into_iter()
                .map(|(t, u, v)| {
                    let object_point = local_ray.position(t);
                    let normal = cylinder::local_normal_at(object_point, *min, *max);
                    (t, u, v, normal, object_point)
                })
                .collect(),
            Shape::Cone { min, max, closed } => cone::local_intersect(&local_ray, *min, *max, *closed)
                .into_iter()
                .map(|(t, u, v)| {
                    let object_point = local_ray.position(t);
                    let normal = cone::local_normal_at(object_point, *min, *max);
                    (t, u, v, normal, object_point)
                })
                .collect(),
            Shape::Triangle { p1, e1, e2, normal, .. } => {
                triangle::local_intersect(&local_ray, *p1, *e1, *e2)
                    .into_iter()
                    .map(|(t, u, v)| (t, u, v, *normal, local_ray.position(t)))
                    .collect()
            }
            Shape::SmoothTriangle { p1, n1, n2, n3, e1, e2, .. } => {
                triangle::local_intersect(&local_ray, *p1, *e1, *e2)
                    .into_iter()
                    .map(|(t, u, v)| {
                        let normal = *n2 * u + *n3 * v + *n1 * (1.0 - u - v);
                        (t, u, v, normal, local_ray.position(t))
                    })
                    .collect()
            }
        };

        let normal_to_parent = self.inverse.transpose();
        for (_, _, _, normal, _) in &mut hits {
            *normal = (*normal * normal_to_parent).normalize();
        }

        hits.into_iter()
            .map(|(t, u, v, normal, object_point)| Hit { t, u, v, normal, object_point, primitive: self })
            .collect()
    }
}
