//! Hash functions. Only SHA-256 lives here today, implemented from the
//! FIPS 180-4 description as a streaming hasher.

mod digest;
mod sha256;

pub use digest::{Digest, DIGEST_SIZE};
pub use sha256::{sha256, Sha256};
