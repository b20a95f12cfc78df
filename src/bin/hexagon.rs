use std::fs::File;
use std::time::Instant;

use clap::Parser;

use whitted::camera::Camera;
use whitted::color::Color;
use whitted::light::PointLight;
use whitted::material::Material;
use whitted::pattern::Pattern;
use whitted::point::Point;
use whitted::primitive::Primitive;
use whitted::transform::{view_transform, Transform};
use whitted::vector::Vector;
use whitted::world::World;

#[derive(Parser)]
#[command(about = "Renders a six-sided hexagon built out of spheres and cylinders")]
struct Args {
    /// Write a CPU flamegraph to `file`
    #[arg(long, value_name = "file")]
    cpuprofile: Option<String>,

    /// Write a heap profile to `file` (requires --features dhat-heap)
    #[arg(long, value_name = "file")]
    memprofile: Option<String>,
}

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

fn main() {
    let args = Args::parse();

    #[cfg(feature = "dhat-heap")]
    let _profiler = args.memprofile.as_ref().map(|_| dhat::Profiler::new_heap());
    #[cfg(not(feature = "dhat-heap"))]
    if args.memprofile.is_some() {
        eprintln!("--memprofile requires building with --features dhat-heap");
    }

    let guard = args.cpuprofile.as_ref().map(|_| {
        pprof::ProfilerGuardBuilder::default()
            .frequency(1000)
            .blocklist(&["libc", "libgcc", "pthread", "vdso"])
            .build()
            .expect("could not start CPU profiler")
    });

    let light = PointLight::new(Point::new(-10.0, 10.0, -10.0), Color::white());

    let hex = hexagon()
        .with_material(Material::new(Pattern::solid(color_from_u32(0xafba3c))))
        .with_transform(
            Transform::identity()
                .rotate_x(-std::f64::consts::PI / 5.0)
                .translate(0.0, 1.0, 0.0)
                .matrix(),
        );

    let mut world = World::new();
    world.primitives.push(hex);
    world.lights.push(light);

    let camera = Camera::new(1920, 1080, std::f64::consts::PI / 3.0).with_transform(view_transform(
        Point::new(0.0, 1.5, -5.0),
        Point::new(0.0, 1.0, 0.0),
        Vector::new(0.0, 1.0, 0.0),
    ));

    let start = Instant::now();
    let canvas = camera.render(&world);
    println!("Render time: {:?}", start.elapsed());

    world.stats.log();

    canvas.to_image().save("hexagon.png").expect("could not write hexagon.png");

    if let Some(guard) = guard {
        if let Some(path) = args.cpuprofile {
            if let Ok(report) = guard.report().build() {
                let file = File::create(&path).expect("could not create cpu profile file");
                report.flamegraph(file).expect("could not write flamegraph");
            }
        }
    }
}

fn color_from_u32(v: u32) -> Color {
    let r = ((v >> 16) & 0xff) as f64 / 255.0;
    let g = ((v >> 8) & 0xff) as f64 / 255.0;
    let b = (v & 0xff) as f64 / 255.0;
    Color::new(r, g, b)
}

fn hexagon_corner() -> Primitive {
    Primitive::sphere().with_transform(Transform::identity().scale(0.25, 0.25, 0.25).translate(0.0, 0.0, -1.0).matrix())
}

fn hexagon_edge() -> Primitive {
    Primitive::cylinder(0.0, 1.0, false).with_transform(
        Transform::identity()
            .scale(0.25, 1.0, 0.25)
            .rotate_z(-std::f64::consts::FRAC_PI_2)
            .rotate_y(-std::f64::consts::PI / 6.0)
            .translate(0.0, 0.0, -1.0)
            .matrix(),
    )
}

fn hexagon_side() -> Primitive {
    Primitive::group(vec![hexagon_corner(), hexagon_edge()])
}

fn hexagon() -> Primitive {
    let sides = (0..=5)
        .map(|n| hexagon_side().with_transform(whitted::matrix::Matrix4::rotation_y(n as f64 * std::f64::consts::PI / 3.0)))
        .collect();
    Primitive::group(sides)
}
