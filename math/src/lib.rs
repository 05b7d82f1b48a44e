//! Number theory over [`torreon_primitives::BigUint`]: secure
//! randomness, Euclidean algorithms, the Jacobi symbol and
//! probabilistic primality testing.

pub mod arithmetics;
pub mod primes;
pub mod random;

mod small_primes;

pub use arithmetics::{extended_euclidean, gcd, inverse_mod, lcm, ExtendedEuclidean, Sign};
pub use primes::{
    is_prime, is_prime_solovay_strassen, jacobi, random_prime, random_prime_with_bits,
    SOLOVAY_STRASSEN_ROUNDS,
};
pub use random::{
    secure_random_biguint, secure_random_biguint_with_max_bits, secure_random_u64,
    secure_random_u8,
};
