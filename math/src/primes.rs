//! Primality: the Jacobi symbol, the Solovay-Strassen probabilistic
//! test fronted by trial division, and random prime generation.

use log::{debug, trace};
use torreon_primitives::BigUint;

use crate::random::secure_random_biguint_with_max_bits;
use crate::small_primes::SMALL_PRIMES;

/// Number of Solovay-Strassen witnesses checked by default. A
/// composite survives a single witness with probability at most 1/2,
/// so 100 rounds push the error below 2^-100.
pub const SOLOVAY_STRASSEN_ROUNDS: usize = 100;

/// The Jacobi symbol `(a / n)` for odd `n`, computed recursively:
///
/// - `0` when `a = 0 (mod n)`
/// - for even `a`: `(-1)^((n^2 - 1) / 8) * (a/2 / n)`
/// - otherwise: `(-1)^((a - 1)(n - 1) / 4) * (n mod a / a)`
pub fn jacobi(a: &BigUint, n: &BigUint) -> i8 {
    if a.div_rem(n).1.is_zero() {
        return 0;
    }

    let one = BigUint::one(a.size());
    if *a == one {
        return 1;
    }

    if a.is_even() {
        // exponent (n^2 - 1) / 8; only its parity matters but the
        // value is formed exactly, in double width
        let mut exponent = n.mul_wide(n);
        exponent.overflowing_sub_assign(&one);
        exponent >>= 3;
        let factor = if exponent.is_even() { 1 } else { -1 };

        factor * jacobi(&(a >> 1), n)
    } else {
        // exponent (a - 1)(n - 1) / 4
        let mut exponent = (a - &one).mul_wide(&(n - &one));
        exponent >>= 2;
        let factor = if exponent.is_even() { 1 } else { -1 };

        factor * jacobi(&n.div_rem(a).1, a)
    }
}

/// Solovay-Strassen primality test for an odd candidate `p`.
///
/// Each round draws a witness `a` with `0 < a <= p - 1` (out-of-range
/// draws are redone without being counted) and accepts it iff the
/// Jacobi symbol agrees with the Euler criterion
/// `a^((p-1)/2) = (a / p) (mod p)`. Any failing witness proves the
/// candidate composite.
pub fn is_prime_solovay_strassen(p: &BigUint, rounds: usize) -> bool {
    let one = BigUint::one(p.size());
    let mut p_minus_1 = p.clone();
    p_minus_1.overflowing_sub_assign(&one);
    let exponent = &p_minus_1 >> 1;

    let mut checked = 0;
    while checked < rounds {
        let a = secure_random_biguint_with_max_bits(p.size(), p.bits());
        if a.is_zero() || a >= *p {
            continue;
        }

        let j = jacobi(&a, p);
        let x = a.pow_mod(&exponent, p);
        let witness_holds = (j == 1 && x == one) || (j == -1 && x == p_minus_1);
        if !witness_holds {
            trace!("witness {} rejects candidate", a);
            return false;
        }
        checked += 1;
    }
    true
}

/// Whether `a` is prime.
///
/// Trial-divides by the first 1000 primes: a candidate at most equal to
/// the current divisor has survived every prime below it and is prime
/// by construction, a zero remainder proves it composite. Survivors go
/// through [`is_prime_solovay_strassen`].
pub fn is_prime(a: &BigUint) -> bool {
    if a.bits() <= 1 {
        // 0 and 1
        return false;
    }

    for &small in SMALL_PRIMES.iter() {
        let p = BigUint::from_u64(small, a.size());
        if *a <= p {
            return true;
        }
        if a.div_rem(&p).1.is_zero() {
            return false;
        }
    }

    is_prime_solovay_strassen(a, SOLOVAY_STRASSEN_ROUNDS)
}

/// Draws random odd values of at most `bits` bits until one tests
/// prime. Termination is probabilistic; the expected number of draws
/// grows linearly with `bits`.
pub fn random_prime_with_bits(size: usize, bits: usize) -> BigUint {
    let mut attempts = 0usize;
    loop {
        attempts += 1;
        let mut candidate = secure_random_biguint_with_max_bits(size, bits);
        candidate.set_bit(0);
        if is_prime(&candidate) {
            debug!("found a {} bit prime after {} candidates", bits, attempts);
            return candidate;
        }
    }
}

/// Draws a random prime spanning the full width.
pub fn random_prime(size: usize) -> BigUint {
    random_prime_with_bits(size, size * torreon_primitives::LIMB_BITS)
}
