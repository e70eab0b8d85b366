#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spinview::surface::HeadlessSurface;
use spinview::SpinViewer;

fn drag_sweep_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_sweep");

    for frames in [32usize, 360, 3600] {
        group.bench_function(format!("{frames}_frames"), |b| {
            let mut viewer =
                SpinViewer::initialize(frames, 5.0, |_| HeadlessSurface::new())
                    .unwrap();
            viewer.handle_pointer_down(0.0);
            let mut x = 0.0f32;
            b.iter(|| {
                // Alternate direction so every move commits a step
                x = if x > 0.0 { 0.0 } else { 6.0 };
                black_box(viewer.handle_pointer_move(black_box(x)).unwrap())
            });
        });
    }

    group.finish();
}

fn sub_threshold_benchmark(c: &mut Criterion) {
    let mut viewer =
        SpinViewer::initialize(360, 5.0, |_| HeadlessSurface::new()).unwrap();
    viewer.handle_pointer_down(0.0);

    c.bench_function("sub_threshold_move", |b| {
        b.iter(|| black_box(viewer.handle_pointer_move(black_box(3.0)).unwrap()))
    });
}

criterion_group!(benches, drag_sweep_benchmark, sub_threshold_benchmark);
criterion_main!(benches);
