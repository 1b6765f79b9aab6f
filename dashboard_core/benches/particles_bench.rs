use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dashboard_core::particles::{ParticleConfig, ParticleSystem};
use dashboard_core::types::Point;
use dashboard_core::{Dashboard, DashboardConfig, DrawList};

fn bench_particles(c: &mut Criterion) {
    let mut group = c.benchmark_group("particles");

    for n in [300, 3_000, 30_000] {
        group.bench_function(format!("{n}_update"), |b| {
            let config = ParticleConfig {
                count: n,
                ..ParticleConfig::default()
            };
            let mut system = ParticleSystem::seeded(config, 42);
            let mut frame = 0u32;
            b.iter(|| {
                // Pointer sweeps across the emitter so the repel branch is hot
                let x = 650.0 + (frame % 300) as f32;
                frame = frame.wrapping_add(1);
                black_box(system.update(1.0 / 60.0, Some(Point::new(x, 450.0))));
            });
        });
    }

    group.finish();
}

fn bench_frame(c: &mut Criterion) {
    c.bench_function("dashboard_tick_and_draw", |b| {
        let mut dashboard = Dashboard::new(DashboardConfig::default(), 42);
        let mut list = DrawList::new();
        b.iter(|| {
            dashboard.tick(1.0 / 60.0, Some(Point::new(810.0, 440.0)));
            list.clear();
            dashboard.draw(&mut list, "2024-01-01 00:00:00");
            black_box(list.len());
        });
    });
}

criterion_group!(benches, bench_particles, bench_frame);
criterion_main!(benches);
