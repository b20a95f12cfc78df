use std::fs::File;
use std::time::Instant;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

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
#[command(about = "Renders a grid of randomly scaled and tinted glass marbles on a checkered floor")]
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

    let floor = Primitive::plane().with_material(Material {
        specular: 0.0,
        ambient: 0.5,
        reflective: 0.0,
        ..Material::new(Pattern::checker(color_from_u32(0xded3d3), Color::black()))
    });

    let light = PointLight::new(Point::new(10.0, 30.0, -10.0), Color::white());

    let mut world = World::new();
    world.lights.push(light);
    world.primitives.push(floor);

    let mut rng = StdRng::seed_from_u64(0);

    let length = 16;
    let spacing = 3.0;
    let mut marbles = Vec::with_capacity(length * length);
    for x in 0..length {
        for z in 0..length {
            let scale = rng.gen::<f64>() + 0.5;
            let x_trans = x as f64 * spacing + spacing * rng.gen::<f64>();
            let z_trans = z as f64 * spacing + spacing * rng.gen::<f64>();
            let color1 = color_from_u32(rng.gen::<u32>() & 0x00ff_ffff);
            let color2 = color_from_u32(rng.gen::<u32>() & 0x00ff_ffff);

            let sphere = Primitive::sphere()
                .with_transform(
                    Transform::identity()
                        .scale(scale, scale, scale)
                        .translate(x_trans, 1.0 + scale / 2.0, z_trans)
                        .matrix(),
                )
                .with_material(Material {
                    diffuse: 0.7,
                    reflective: 0.2,
                    specular: 0.8,
                    ..Material::new(
                        Pattern::gradient(color1, color2)
                            .with_transform(whitted::matrix::Matrix4::rotation_y(std::f64::consts::PI / 8.0)),
                    )
                });

            marbles.push(sphere);
        }
    }

    world.primitives.push(Primitive::group(marbles));

    let camera = Camera::new(1920, 1080, std::f64::consts::PI / 7.0).with_transform(view_transform(
        Point::new(0.0, 50.0, 0.0),
        Point::new(length as f64 * spacing, 1.0, length as f64 * spacing),
        Vector::new(0.0, 1.0, 0.0),
    ));

    let start = Instant::now();
    let canvas = camera.render(&world);
    println!("Render time: {:?}", start.elapsed());

    world.stats.log();

    canvas.to_image().save("marbles.png").expect("could not write marbles.png");

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
