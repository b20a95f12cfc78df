use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic ray counters, incremented wherever a ray of that kind is cast:
/// `World::color_at` for eye rays, `is_shadowed` for shadow rays,
/// `reflected_color`/`refracted_color` for the recursive pair.
#[derive(Debug, Default)]
pub struct Stats {
    eye_ray_count: AtomicU64,
    shadow_ray_count: AtomicU64,
    reflection_ray_count: AtomicU64,
    refraction_ray_count: AtomicU64,
}

impl Stats {
    pub fn new() -> Stats {
        Stats::default()
    }

    pub fn inc_eye_ray(&self) {
        self.eye_ray_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_shadow_ray(&self) {
        self.shadow_ray_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_reflection_ray(&self) {
        self.reflection_ray_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_refraction_ray(&self) {
        self.refraction_ray_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn eye_ray_count(&self) -> u64 {
        self.eye_ray_count.load(Ordering::Relaxed)
    }

    pub fn shadow_ray_count(&self) -> u64 {
        self.shadow_ray_count.load(Ordering::Relaxed)
    }

    pub fn reflection_ray_count(&self) -> u64 {
        self.reflection_ray_count.load(Ordering::Relaxed)
    }

    pub fn refraction_ray_count(&self) -> u64 {
        self.refraction_ray_count.load(Ordering::Relaxed)
    }

    pub fn total_ray_count(&self) -> u64 {
        self.eye_ray_count() + self.shadow_ray_count() + self.reflection_ray_count() + self.refraction_ray_count()
    }

    pub fn log(&self) {
        println!(
            "eye rays: {}, shadow rays: {}, reflection rays: {}, refraction rays: {}, total: {}",
            self.eye_ray_count(),
            self.shadow_ray_count(),
            self.reflection_ray_count(),
            self.refraction_ray_count(),
            self.total_ray_count()
        );
    }
}
