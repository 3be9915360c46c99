// Copyright 2026 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Affine, Point, Size, Vec2};
use spyglass_viewport::{PanZoom, ViewportHost, clamp_translation};

struct BenchHost {
    viewport: Size,
    content: Option<Size>,
}

impl ViewportHost for BenchHost {
    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn content_size(&self) -> Option<Size> {
        self.content
    }

    fn transform_changed(&mut self, transform: Affine) {
        black_box(transform);
    }
}

fn host() -> BenchHost {
    BenchHost {
        viewport: Size::new(800.0, 600.0),
        content: Some(Size::new(4000.0, 3000.0)),
    }
}

fn bench_wheel_zoom(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport/wheel_zoom");

    // One full swing across the zoom range, hitting both limits.
    group.bench_function("in_out_swing", |b| {
        b.iter_batched(
            || (PanZoom::new(), host()),
            |(mut view, mut h)| {
                for _ in 0..13 {
                    view.wheel_zoom(1.0, Point::new(400.0, 300.0), &mut h);
                }
                for _ in 0..13 {
                    view.wheel_zoom(-1.0, Point::new(400.0, 300.0), &mut h);
                }
                black_box(view);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_pan_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport/pan");

    // A 64-sample drag, the hot path while the pointer is captured.
    group.bench_function("drag_64_samples", |b| {
        b.iter_batched(
            || {
                let mut h = host();
                let mut view = PanZoom::new();
                view.start_pan(Point::new(400.0, 300.0), &mut h);
                (view, h)
            },
            |(mut view, mut h)| {
                for i in 0..64 {
                    let t = f64::from(i);
                    view.pan_to(Point::new(400.0 - 3.0 * t, 300.0 - 2.0 * t), &mut h);
                }
                view.end_pan(&mut h);
                black_box(view);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_bounds_clamp(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport/clamp_translation");

    let viewport = Size::new(800.0, 600.0);
    let content = Size::new(4000.0, 3000.0);
    // Offsets sweeping from centered to far out of range, at varying scales.
    let transforms: Vec<Affine> = (0..256)
        .map(|i| {
            let t = f64::from(i);
            Affine::scale(1.0 + t / 64.0).with_translation(Vec2::new(-25.0 * t, 13.0 * t))
        })
        .collect();

    group.throughput(Throughput::Elements(transforms.len() as u64));
    group.bench_function("mixed_offsets", |b| {
        b.iter(|| {
            for &transform in &transforms {
                black_box(clamp_translation(black_box(transform), viewport, content));
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_wheel_zoom,
    bench_pan_drag,
    bench_bounds_clamp
);
criterion_main!(benches);
