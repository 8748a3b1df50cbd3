//! Cached vs uncached pip layout lookups.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use card_pips::cache::LayoutCache;
use card_pips::core::IconCount;
use card_pips::layout::build_layout;

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_layout 0..=14", |b| {
        b.iter(|| {
            for n in 0..=14 {
                black_box(build_layout(IconCount::new(black_box(n))));
            }
        })
    });
}

fn bench_cached(c: &mut Criterion) {
    let cache = LayoutCache::new();
    cache.warm((0..=14).map(IconCount::new));

    c.bench_function("cached get 0..=14", |b| {
        b.iter(|| {
            for n in 0..=14 {
                black_box(cache.get(IconCount::new(black_box(n))));
            }
        })
    });
}

criterion_group!(benches, bench_build, bench_cached);
criterion_main!(benches);
