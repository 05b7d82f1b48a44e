//! Overflow-aware operations on a single 64-bit limb.
//!
//! This module is the only place allowed to widen through 128-bit
//! arithmetic; everything above it composes limbs through the
//! carry/overflow flags returned here.

/// Adds two limbs, returning the wrapped result and whether a carry
/// left the top bit.
#[inline]
pub fn overflowing_add(a: u64, b: u64) -> (u64, bool) {
    a.overflowing_add(b)
}

/// Subtracts `b` from `a`, returning the wrapped result and whether a
/// borrow occurred.
#[inline]
pub fn overflowing_sub(a: u64, b: u64) -> (u64, bool) {
    a.overflowing_sub(b)
}

/// Full 64x64 -> 128 bit multiplication, split as (low, high) limbs.
#[inline]
pub fn widening_mul(a: u64, b: u64) -> (u64, u64) {
    let wide = (a as u128) * (b as u128);
    (wide as u64, (wide >> 64) as u64)
}

/// Multiplies two limbs, returning the low limb and whether the high
/// limb of the full product is nonzero.
#[inline]
pub fn overflowing_mul(a: u64, b: u64) -> (u64, bool) {
    let (lo, hi) = widening_mul(a, b);
    (lo, hi != 0)
}

/// Number of leading zero bits, in 0..=64.
#[inline]
pub fn leading_zeros(a: u64) -> u32 {
    a.leading_zeros()
}
