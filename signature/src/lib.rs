//! RSA key generation, encryption and digital signatures, padded per
//! PKCS#1 v1.5 (RFC 8017 sections 7.2 and 8.2).

mod digest_info;
mod error;
mod keys;
mod pkcs1v15;

pub use digest_info::{digest_info_for, DigestInfo, HashAlgorithm, DIGEST_INFOS};
pub use error::RsaError;
pub use keys::{RsaKeyPair, RsaPrivateKey, RsaPublicKey, PUBLIC_EXPONENT};
