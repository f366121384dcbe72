// Copyright 2025 the Grid Paper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use gridpaper_viewport::{Axis, ViewportConfig, ViewportController};
use kurbo::Size;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

fn controller(aspect_lock: bool) -> ViewportController {
    ViewportController::new(
        ViewportConfig::default().aspect_lock(aspect_lock),
        Size::new(1280.0, 720.0),
    )
    .expect("default config is valid")
}

fn bench_bar_drags(c: &mut Criterion) {
    let mut group = c.benchmark_group("bar_drags");
    for aspect_lock in [false, true] {
        let name = if aspect_lock { "locked" } else { "unlocked" };
        group.bench_function(name, |b| {
            b.iter_batched(
                || (controller(aspect_lock), Lcg::new(0x5eed)),
                |(mut vp, mut rng)| {
                    for i in 0..256 {
                        let axis = if i % 2 == 0 {
                            Axis::Horizontal
                        } else {
                            Axis::Vertical
                        };
                        let lower = rng.next_unit() * 0.8;
                        vp.set_bar_range(axis, lower, lower + 0.15);
                    }
                    black_box(vp.display_rect());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_wheel_zoom(c: &mut Criterion) {
    c.bench_function("wheel_zoom_in_out", |b| {
        b.iter_batched(
            || (controller(true), Lcg::new(42)),
            |(mut vp, mut rng)| {
                for i in 0..256 {
                    let d = vp.display_rect();
                    let x = d.x0 + rng.next_unit() * d.width();
                    let y = d.y0 + rng.next_unit() * d.height();
                    let scale = if i % 3 == 2 { 0.8 } else { 1.25 };
                    vp.zoom_at(x, y, scale);
                }
                black_box(vp.display_rect());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_grid_lines(c: &mut Criterion) {
    let mut vp = controller(true);
    vp.zoom_at(0.0, 0.0, 40.0);
    c.bench_function("visible_grid_lines", |b| {
        b.iter(|| {
            let mut count = 0_usize;
            for level in vp.visible_grid_levels(4.0) {
                for axis in Axis::ALL {
                    count += vp.grid_lines(axis, level).count();
                }
            }
            black_box(count)
        });
    });
}

criterion_group!(benches, bench_bar_drags, bench_wheel_zoom, bench_grid_lines);
criterion_main!(benches);
