//! Benchmarks for the Toy-97 engine
//!
//! Nothing here is performance-critical (the field has 97 elements), but
//! the relative cost of the scalar ladder vs the O(p²) enumerator is a
//! useful thing to show.

use criterion::{criterion_group, criterion_main, Criterion};
use toycrypt_algorithms::ec::{enumerate_points, Curve};
use toycrypt_algorithms::stream::Lcg32;
use toycrypt_params::TOY_97;

fn bench_scalar_mul(c: &mut Criterion) {
    let curve = Curve::new(&TOY_97).unwrap();
    let g = curve.generator();
    c.bench_function("scalar_mul 49*G", |b| {
        b.iter(|| curve.scalar_mul(std::hint::black_box(49), &g))
    });
}

fn bench_enumerate(c: &mut Criterion) {
    c.bench_function("enumerate_points Toy-97", |b| {
        b.iter(|| enumerate_points(std::hint::black_box(&TOY_97)).unwrap())
    });
}

fn bench_keystream(c: &mut Criterion) {
    c.bench_function("lcg keystream 1KiB", |b| {
        b.iter(|| Lcg32::keystream_bytes(std::hint::black_box(53), 1024))
    });
}

criterion_group!(benches, bench_scalar_mul, bench_enumerate, bench_keystream);
criterion_main!(benches);
