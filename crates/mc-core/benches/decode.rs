use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use mc_core::model::decode;

fn bench_decode(c: &mut Criterion) {
    c.bench_function("decode_valid", |b| {
        b.iter(|| decode(black_box("aj052txj3kg/eu")));
    });
    c.bench_function("decode_rejected", |b| {
        b.iter(|| decode(black_box("short")));
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
