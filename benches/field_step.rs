//! Benchmarks for the engine tick and the connection pass.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ffpe::{Engine, FieldConfig, PointerEvent, Vec2};

fn engine_with(config: FieldConfig) -> Engine {
    Engine::with_seed(config, 1280.0, 720.0, 42).unwrap()
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    group.bench_function("fluid_80", |b| {
        let mut engine = engine_with(FieldConfig::fluid());
        engine.handle_pointer(PointerEvent::Moved(Vec2::new(640.0, 360.0)));
        b.iter(|| {
            engine.tick();
            black_box(engine.ticks())
        })
    });

    group.bench_function("ripple_25", |b| {
        let mut engine = engine_with(FieldConfig::ripple());
        engine.handle_pointer(PointerEvent::Moved(Vec2::new(640.0, 360.0)));
        engine.handle_pointer(PointerEvent::Clicked(Vec2::new(640.0, 360.0)));
        b.iter(|| {
            engine.tick();
            black_box(engine.ticks())
        })
    });

    group.finish();
}

fn bench_tick_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_scaling");

    for count in [25, 80, 200, 400] {
        group.bench_with_input(BenchmarkId::new("fluid", count), &count, |b, &count| {
            let mut config = FieldConfig::fluid();
            config.particle_count = count;
            let mut engine = engine_with(config);
            b.iter(|| engine.tick())
        });
    }

    group.finish();
}

fn bench_connections(c: &mut Criterion) {
    let mut group = c.benchmark_group("connections");

    for count in [25, 80, 200] {
        group.bench_with_input(BenchmarkId::new("edges", count), &count, |b, &count| {
            let mut config = FieldConfig::fluid();
            config.particle_count = count;
            let mut engine = engine_with(config);
            // Let the pool settle into a lived-in distribution first.
            for _ in 0..120 {
                engine.tick();
            }
            b.iter(|| black_box(engine.connections()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tick, bench_tick_scaling, bench_connections);
criterion_main!(benches);
