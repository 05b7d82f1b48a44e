//! Cryptographically secure random values.
//!
//! Everything here draws from the operating system CSPRNG through
//! [`OsRng`]; there is no process-wide handle to guard, each call is an
//! independent read. A failing entropy source aborts the process,
//! missing OS randomness is not a recoverable condition.

use rand::rngs::OsRng;
use rand::RngCore;
use torreon_primitives::{BigUint, LIMB_BITS};

/// Generate a cryptographically secure random byte.
pub fn secure_random_u8() -> u8 {
    (OsRng.next_u32() & 0xFF) as u8
}

/// Generate a cryptographically secure random u64.
pub fn secure_random_u64() -> u64 {
    OsRng.next_u64()
}

/// Generate a `size`-limb value with every limb drawn fresh.
pub fn secure_random_biguint(size: usize) -> BigUint {
    let mut limbs = vec![0u64; size];
    for limb in limbs.iter_mut() {
        *limb = OsRng.next_u64();
    }
    BigUint::from_limbs(limbs)
}

/// Generate a `size`-limb value of at most `max_bits` bits: limbs are
/// drawn fresh, then everything at or above bit `max_bits` is masked
/// off and fully unused high limbs are zeroed.
pub fn secure_random_biguint_with_max_bits(size: usize, max_bits: usize) -> BigUint {
    let mut limbs = vec![0u64; size];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let limb_start = i * LIMB_BITS;
        if limb_start >= max_bits {
            break;
        }

        *limb = OsRng.next_u64();
        let available = max_bits - limb_start;
        if available < LIMB_BITS {
            *limb &= (1u64 << available) - 1;
        }
    }
    BigUint::from_limbs(limbs)
}
