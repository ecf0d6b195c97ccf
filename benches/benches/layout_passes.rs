// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use understory_layout::{
    ComposedLayout, FixedItem, Layout, LinearStack, ProposedSize, PyramidStack, RadialStack,
    SizeClass, SpiralStack,
};

const COUNTS: [usize; 3] = [8, 64, 512];

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_items(n: usize, seed: u64) -> Vec<FixedItem> {
    let mut rng = Rng::new(seed);
    (0..n)
        .map(|_| {
            FixedItem::new(10.0 + rng.next_f64() * 50.0, 10.0 + rng.next_f64() * 30.0)
                .with_priority(rng.next_f64() * 10.0)
        })
        .collect()
}

fn bounds() -> Rect {
    Rect::new(0.0, 0.0, 1024.0, 768.0)
}

/// One host pass: refresh the cache, measure, then place.
fn full_pass<L: Layout>(layout: &L, items: &mut [FixedItem], cache: &mut L::Cache) {
    layout.update_cache(cache, items);
    let size = layout.measure(ProposedSize::from_size(bounds().size()), items, cache);
    layout.place(bounds(), ProposedSize::from_size(size), items, cache);
}

fn bench_layout<L: Layout>(c: &mut Criterion, name: &str, layout: L) {
    let mut group = c.benchmark_group(name);
    for n in COUNTS {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("cold_pass_n{n}"), |b| {
            b.iter_batched(
                || gen_items(n, 0x5EED),
                |mut items| {
                    let mut cache = layout.make_cache(&items);
                    full_pass(&layout, &mut items, &mut cache);
                    black_box(items);
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("warm_place_n{n}"), |b| {
            let mut items = gen_items(n, 0x5EED);
            let mut cache = layout.make_cache(&items);
            full_pass(&layout, &mut items, &mut cache);
            b.iter(|| {
                layout.place(bounds(), ProposedSize::UNSPECIFIED, &mut items, &mut cache);
                black_box(&items);
            });
        });
    }
    group.finish();
}

fn bench_linear(c: &mut Criterion) {
    bench_layout(c, "linear", LinearStack::vertical().with_spacing(8.0));
}

fn bench_radial(c: &mut Criterion) {
    bench_layout(c, "radial", RadialStack::new());
}

fn bench_spiral(c: &mut Criterion) {
    bench_layout(c, "spiral", SpiralStack::default());
}

fn bench_pyramid(c: &mut Criterion) {
    bench_layout(c, "pyramid", PyramidStack::default().with_spacing(8.0));
    let mut group = c.benchmark_group("pyramid_scales");
    for n in COUNTS {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("place_and_apply_scales_n{n}"), |b| {
            let pyramid = PyramidStack::default();
            b.iter_batched(
                || gen_items(n, 0xC0FFEE),
                |mut items| {
                    let updates = pyramid.place_ranked(bounds(), &mut items);
                    updates.apply(&mut items);
                    black_box(items);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_composed_flip(c: &mut Criterion) {
    let mut group = c.benchmark_group("composed");
    let layout = ComposedLayout::default();
    let compact = layout.with_size_classes(Some(SizeClass::Compact), None);
    let regular = layout.with_size_classes(Some(SizeClass::Regular), None);
    for n in COUNTS {
        group.throughput(Throughput::Elements(2 * n as u64));
        group.bench_function(format!("flip_size_class_n{n}"), |b| {
            let mut items = gen_items(n, 0xF11F);
            let mut cache = layout.make_cache(&items);
            b.iter(|| {
                compact.place(bounds(), ProposedSize::UNSPECIFIED, &mut items, &mut cache);
                regular.place(bounds(), ProposedSize::UNSPECIFIED, &mut items, &mut cache);
                black_box(&items);
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_linear,
    bench_radial,
    bench_spiral,
    bench_pyramid,
    bench_composed_flip
);
criterion_main!(benches);
