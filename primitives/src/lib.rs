//! Fixed-width unsigned big integer arithmetic.
//!
//! The building block is a 64-bit limb; a [`BigUint`] is an owned,
//! little-endian sequence of limbs whose width is fixed at construction.
//! Every operation is closed over that width modulo 2^(64*N), with
//! overflow reported through explicit flags rather than panics.

pub mod limb;

mod biguint;

pub use biguint::{BigUint, ParseBigUintError, LIMB_BITS, LIMB_BYTES};
