mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use field_cloud::prelude::{step, DisplayMode, FieldFunction, FrameConfig, Lattice};

const RESOLUTIONS: [u32; 3] = [10, 30, 64];

fn frame_step_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame/step");
    for &resolution in &RESOLUTIONS {
        let points = (resolution as usize).pow(3);
        group.throughput(common::points_throughput(points));

        for function in FieldFunction::ALL {
            let config = FrameConfig::new(function).with_resolution(resolution);
            let mut lattice = Lattice::new();
            // Build up front so the measured loop is the steady-state path.
            step(&mut lattice, &config, 0.0);

            group.bench_with_input(
                BenchmarkId::new(function.label(), resolution),
                &resolution,
                |b, _| {
                    let mut time = 0.0f32;
                    b.iter(|| {
                        time += 1.0 / 60.0;
                        let report = step(&mut lattice, &config, black_box(time));
                        black_box(report.points_evaluated);
                    });
                },
            );
        }
    }
    group.finish();
}

fn frame_mode_benches(c: &mut Criterion) {
    let resolution = 30u32;
    let modes = [
        ("continuous", DisplayMode::Continuous),
        ("thresholded", DisplayMode::Thresholded),
    ];

    let mut group = c.benchmark_group("frame/mode");
    group.throughput(common::points_throughput((resolution as usize).pow(3)));
    for (name, mode) in modes {
        let config = FrameConfig::new(FieldFunction::Ripple)
            .with_resolution(resolution)
            .with_mode(mode);
        let mut lattice = Lattice::new();
        step(&mut lattice, &config, 0.0);

        group.bench_with_input(BenchmarkId::new(name, resolution), &resolution, |b, _| {
            let mut time = 0.0f32;
            b.iter(|| {
                time += 1.0 / 60.0;
                let report = step(&mut lattice, &config, black_box(time));
                black_box(report.points_evaluated);
            });
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = frame_step_benches, frame_mode_benches
}
criterion_main!(benches);
