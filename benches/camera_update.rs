use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quadview::camera::Camera;

/// Benchmark: per-frame camera work while a zoom key is held
fn bench_camera_update_zooming(c: &mut Criterion) {
    let mut camera = Camera::new();
    camera.zoom.closer = true;

    c.bench_function("camera_update_zooming", |b| {
        b.iter(|| {
            camera.update(black_box(0.016));
            black_box(camera.mvp())
        })
    });
}

/// Benchmark: per-frame camera work with no input held
fn bench_camera_update_idle(c: &mut Criterion) {
    let mut camera = Camera::new();

    c.bench_function("camera_update_idle", |b| {
        b.iter(|| {
            camera.update(black_box(0.016));
            black_box(camera.mvp())
        })
    });
}

/// Benchmark: composing the final matrix from already-built parts
fn bench_mvp_compose(c: &mut Criterion) {
    let mut camera = Camera::new();
    camera.xradians = 0.4;
    camera.yradians = -0.2;
    camera.update(0.016);

    c.bench_function("mvp_compose", |b| b.iter(|| black_box(camera.mvp())));
}

/// Benchmark: draining a burst of wheel events into the camera
fn bench_scroll_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_burst");

    for count in [1u32, 16, 128].iter() {
        group.bench_with_input(BenchmarkId::new("notches", count), count, |b, &count| {
            let mut camera = Camera::new();
            b.iter(|| {
                for _ in 0..count {
                    camera.apply_scroll(black_box(1.0), black_box(-1.0));
                }
                camera.update(black_box(0.016));
                black_box(camera.mvp())
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_camera_update_zooming,
    bench_camera_update_idle,
    bench_mvp_compose,
    bench_scroll_burst,
);

criterion_main!(benches);
