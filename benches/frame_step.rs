//! Benchmarks for the per-frame CPU work.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ringtoy::prelude::*;

fn bench_engine_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_step");

    for count in [32usize, 256, 1024] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut engine = AnimationEngine::new(Viewport::default(), 1024);
            engine.set_active_count(count);
            let mut age = 0u64;
            b.iter(|| {
                age += 1;
                engine.step(black_box(age), 60.0);
            })
        });
    }

    group.finish();
}

fn bench_gradient(c: &mut Criterion) {
    let gradient = ColorGradient::default();
    c.bench_function("gradient_sample", |b| {
        b.iter(|| black_box(gradient.sample(black_box(0.7), black_box(0.3))))
    });
}

fn bench_write_instances(c: &mut Criterion) {
    let mut engine = AnimationEngine::new(Viewport::default(), 1024);
    engine.set_active_count(1024);
    engine.step(1, 60.0);
    let mut out = Vec::with_capacity(1024);
    c.bench_function("write_instances_1024", |b| {
        b.iter(|| {
            engine.write_instances(&mut out);
            black_box(bytemuck::cast_slice::<ParticleInstance, u8>(&out).len())
        })
    });
}

fn bench_drag(c: &mut Criterion) {
    let Ok(mut scene) = Scene::new(SceneConfig::default()) else {
        return;
    };
    let control = scene.control(ControlKind::Speed);
    let knob_center = Vec2::new(control.bar.knob_size() / 2.0, control.bar.height() / 2.0);
    let start = control.origin + knob_center;
    scene.handle_pointer(&PointerEvent::Down {
        id: PointerId::Mouse,
        position: start,
    });

    let mut dx = 0.0f32;
    c.bench_function("scene_drag_move", |b| {
        b.iter(|| {
            dx = (dx + 1.0) % 128.0;
            black_box(scene.handle_pointer(&PointerEvent::Move {
                id: PointerId::Mouse,
                start,
                start_delta: Vec2::new(dx, 0.0),
            }))
        })
    });
}

criterion_group!(benches, bench_engine_step, bench_gradient, bench_write_instances, bench_drag);
criterion_main!(benches);
