use thiserror::Error;

use crate::digest_info::HashAlgorithm;

/// Errors surfaced by the RSA public entry points.
///
/// Unrecoverable preconditions (division by zero, missing OS entropy)
/// panic instead; everything here propagates to the caller untouched,
/// retries are the caller's policy.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsaError {
    /// Plaintext exceeds k - 11 bytes, or a ciphertext is longer than
    /// the modulus
    #[error("message too long for the key modulus")]
    MessageTooLong,

    /// Ciphertext shorter than the modulus, or the modulus cannot hold
    /// a padded DigestInfo
    #[error("message too short for the key modulus")]
    MessageTooShort,

    /// A decrypted message does not follow the 00 02 PS 00 M layout
    #[error("invalid PKCS#1 v1.5 encoded message")]
    InvalidEncodedMessage,

    /// A verified signature does not follow the 00 01 FF.. 00 T
    /// layout, names an unknown DigestInfo, or carries a digest that
    /// does not match the message
    #[error("invalid PKCS#1 v1.5 signature")]
    InvalidSignature,

    /// The hash is in the registry but this implementation does not
    /// compute it
    #[error("hash algorithm {0:?} is not supported")]
    HashNotSupported(HashAlgorithm),
}
