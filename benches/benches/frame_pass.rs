// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_immediate::{DrawItem, FrameDriver, HitRegion, Ui, Widget};

/// A grid of `len` square widgets, 10 per row.
fn grid(len: u32) -> Vec<(u32, HitRegion)> {
    (0..len)
        .map(|i| {
            let x = f64::from(i % 10) * 12.0;
            let y = f64::from(i / 10) * 12.0;
            (i, HitRegion::new(x, y, 10.0, 10.0))
        })
        .collect()
}

fn bench_frame_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame/pass");

    // One full press/release cycle per iteration, so every branch is exercised.
    for len in [16_u32, 256, 4_096] {
        let widgets = grid(len);
        group.throughput(Throughput::Elements(u64::from(len) * 3));

        group.bench_with_input(BenchmarkId::new("widgets", len), &widgets, |b, widgets| {
            let mut driver = FrameDriver::<u32>::new();
            let at = Point::new(5.0, 5.0);
            b.iter(|| {
                for down in [false, true, false] {
                    let mut frame = driver.begin_frame(at, down);
                    for &(id, region) in widgets {
                        black_box(frame.widget(id, region).unwrap());
                    }
                    black_box(frame.end());
                }
            });
        });
    }

    group.finish();
}

fn bench_ui_with_renderer(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame/ui");

    for len in [16_u32, 256, 4_096] {
        let widgets = grid(len);
        let mut flags = vec![false; widgets.len()];
        group.throughput(Throughput::Elements(u64::from(len)));

        group.bench_function(BenchmarkId::new("checkboxes", len), |b| {
            let mut driver = FrameDriver::<u32>::new();
            b.iter(|| {
                let mut ui = Ui::new(driver.begin_frame(Point::new(5.0, 5.0), false));
                for (&(id, region), checked) in widgets.iter().zip(flags.iter_mut()) {
                    let widget = Widget::Checkbox {
                        label: "option",
                        checked,
                    };
                    black_box(ui.add(id, region, widget).unwrap());
                }
                let mut drawn = 0_usize;
                ui.finish(&mut |item: &DrawItem<'_, u32>| drawn += usize::from(item.hot));
                black_box(drawn);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_frame_pass, bench_ui_with_renderer);
criterion_main!(benches);
