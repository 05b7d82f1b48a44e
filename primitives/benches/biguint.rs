use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use torreon_primitives::BigUint;

fn fixtures() -> (BigUint, BigUint) {
    let a = BigUint::from_limbs(vec![
        0x243f6a8885a308d3,
        0x13198a2e03707344,
        0xa4093822299f31d0,
        0x082efa98ec4e6c89,
    ]);
    let b = BigUint::from_limbs(vec![
        0x452821e638d01377,
        0xbe5466cf34e90c6c,
        0xc0ac29b7c97c50dd,
        0x3f84d5b5b5470917,
    ]);
    (a, b)
}

fn bench_add(c: &mut Criterion) {
    let (a, b) = fixtures();
    c.bench_function("biguint_add", |bench| {
        bench.iter(|| black_box(&a) + black_box(&b))
    });
}

fn bench_mul(c: &mut Criterion) {
    let (a, b) = fixtures();
    c.bench_function("biguint_mul", |bench| {
        bench.iter(|| black_box(&a) * black_box(&b))
    });
}

fn bench_div_rem(c: &mut Criterion) {
    let (a, b) = fixtures();
    let divisor = b.resized(2).resized(4);
    c.bench_function("biguint_div_rem", |bench| {
        bench.iter(|| black_box(&a).div_rem(black_box(&divisor)))
    });
}

fn bench_pow_mod(c: &mut Criterion) {
    let (a, b) = fixtures();
    let exponent = BigUint::from_u64(65537, 4);
    c.bench_function("biguint_pow_mod", |bench| {
        bench.iter(|| black_box(&a).pow_mod(black_box(&exponent), black_box(&b)))
    });
}

criterion_group!(benches, bench_add, bench_mul, bench_div_rem, bench_pow_mod);
criterion_main!(benches);
