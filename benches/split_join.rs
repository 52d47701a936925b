use xorshare::recovery::xorsecretsharing::{join, split, split_with_mask};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_split(c: &mut Criterion) {
    let secret = [0x42u8; 1024];
    let mask = [0x17u8; 1024];

    c.bench_function("split 1 KiB", |b| b.iter(|| split(black_box(&secret))));

    c.bench_function("split_with_mask 1 KiB", |b| {
        b.iter(|| split_with_mask(black_box(&secret), black_box(&mask)))
    });
}

pub fn bench_join(c: &mut Criterion) {
    let secret = [0x42u8; 1024];
    let mask = [0x17u8; 1024];

    let [high, low, full] = split_with_mask(&secret, &mask).unwrap();

    c.bench_function("join high+low 1 KiB", |b| {
        b.iter(|| join(black_box(high.as_bytes()), black_box(low.as_bytes())))
    });

    c.bench_function("join low+full 1 KiB", |b| {
        b.iter(|| join(black_box(full.as_bytes()), black_box(low.as_bytes())))
    });
}

criterion_group!(benches, bench_split, bench_join);
criterion_main!(benches);
