use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use torreon_math::{is_prime, is_prime_solovay_strassen, jacobi};
use torreon_primitives::BigUint;

// 2^61 - 1, a Mersenne prime
const MERSENNE_61: u64 = 2305843009213693951;

fn bench_trial_division(c: &mut Criterion) {
    // an even composite dies on the first divisor, a prime walks the
    // whole table before the probabilistic test takes over
    let composite = BigUint::from_u64(MERSENNE_61 - 1, 4);
    c.bench_function("is_prime_trial_division_hit", |bench| {
        bench.iter(|| is_prime(black_box(&composite)))
    });
}

fn bench_solovay_strassen(c: &mut Criterion) {
    let prime = BigUint::from_u64(MERSENNE_61, 4);
    c.bench_function("solovay_strassen_10_rounds", |bench| {
        bench.iter(|| is_prime_solovay_strassen(black_box(&prime), 10))
    });
}

fn bench_jacobi(c: &mut Criterion) {
    let a = BigUint::from_u64(123456789123456789, 4);
    let n = BigUint::from_u64(MERSENNE_61, 4);
    c.bench_function("jacobi", |bench| {
        bench.iter(|| jacobi(black_box(&a), black_box(&n)))
    });
}

criterion_group!(benches, bench_trial_division, bench_solovay_strassen, bench_jacobi);
criterion_main!(benches);
