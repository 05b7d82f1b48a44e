//! PKCS#1 v1.5 padding for encryption (RFC 8017 section 7.2) and for
//! signatures (section 8.2), layered over the raw RSA primitive.

use torreon_hashes::sha256;
use torreon_math::random::secure_random_u8;
use torreon_primitives::BigUint;

use crate::digest_info::{digest_info_for, longest_prefix_match, HashAlgorithm};
use crate::error::RsaError;
use crate::keys::{RsaPrivateKey, RsaPublicKey};

// PS carries at least 8 bytes, which with the three framing bytes
// bounds the message at k - 11
const MIN_PADDING: usize = 11;
const MIN_PS_LEN: usize = 8;

// Octet string to integer, RFC 8017 section 4.2. The bytes are big
// endian and at most 8 * size long.
fn os2ip(bytes: &[u8], size: usize) -> BigUint {
    BigUint::from_bytes_be(bytes).resized(size)
}

// Integer to octet string of exactly k bytes, RFC 8017 section 4.1.
// The value always fits: it was reduced modulo an n of k bytes.
fn i2osp(value: &BigUint, k: usize) -> Vec<u8> {
    let bytes = value.to_bytes_be();
    if bytes.len() >= k {
        bytes[bytes.len() - k..].to_vec()
    } else {
        let mut padded = vec![0u8; k - bytes.len()];
        padded.extend_from_slice(&bytes);
        padded
    }
}

impl RsaPublicKey {
    /// Encrypts `msg` under this key: `EM = 00 02 PS 00 M` with PS
    /// drawn from nonzero random bytes, then `EM^e mod n` serialized
    /// as k big-endian bytes.
    pub fn encrypt_pkcs1v15(&self, msg: &[u8]) -> Result<Vec<u8>, RsaError> {
        let k = self.modulus_len();
        if msg.len() + MIN_PADDING > k {
            return Err(RsaError::MessageTooLong);
        }

        let mut em = vec![0u8; k];
        em[1] = 0x02;
        let ps_len = k - msg.len() - 3;
        for byte in em[2..2 + ps_len].iter_mut() {
            *byte = loop {
                let candidate = secure_random_u8();
                if candidate != 0 {
                    break candidate;
                }
            };
        }
        em[k - msg.len()..].copy_from_slice(msg);

        let m = os2ip(&em, self.n().size());
        let c = m.pow_mod(self.e(), self.n());
        Ok(i2osp(&c, k))
    }

    /// Verifies a signature over `msg`: undoes the RSA primitive,
    /// checks the `00 01 FF.. 00 T` frame, resolves the DigestInfo
    /// prefix inside T and compares the carried digest against a fresh
    /// SHA-256 of the message.
    pub fn verify_pkcs1v15(&self, msg: &[u8], signature: &[u8]) -> Result<(), RsaError> {
        let k = self.modulus_len();
        // a valid signature is exactly as long as the modulus
        if signature.len() != k {
            return Err(RsaError::InvalidSignature);
        }

        let s = os2ip(signature, self.n().size());
        let em = i2osp(&s.pow_mod(self.e(), self.n()), k);

        if em[0] != 0x00 || em[1] != 0x01 {
            return Err(RsaError::InvalidSignature);
        }
        let mut index = 2;
        while index < k && em[index] == 0xFF {
            index += 1;
        }
        if index - 2 < MIN_PS_LEN || index >= k || em[index] != 0x00 {
            return Err(RsaError::InvalidSignature);
        }
        index += 1;

        let encoded = &em[index..];
        let info = longest_prefix_match(encoded).ok_or(RsaError::InvalidSignature)?;
        if !info.supported {
            return Err(RsaError::HashNotSupported(info.algorithm));
        }
        if encoded.len() != info.prefix.len() + info.digest_len {
            return Err(RsaError::InvalidSignature);
        }

        let carried = &encoded[info.prefix.len()..];
        if carried != sha256(msg).as_bytes() {
            return Err(RsaError::InvalidSignature);
        }
        Ok(())
    }
}

impl RsaPrivateKey {
    /// Decrypts a ciphertext of exactly k bytes and strips the
    /// `00 02 PS 00` frame, returning the message bytes.
    pub fn decrypt_pkcs1v15(&self, ciphertext: &[u8]) -> Result<Vec<u8>, RsaError> {
        let k = self.modulus_len();
        if ciphertext.len() > k {
            return Err(RsaError::MessageTooLong);
        }
        if ciphertext.len() < k {
            return Err(RsaError::MessageTooShort);
        }

        let c = os2ip(ciphertext, self.n().size());
        let em = i2osp(&c.pow_mod(self.d(), self.n()), k);

        if em[0] != 0x00 || em[1] != 0x02 {
            return Err(RsaError::InvalidEncodedMessage);
        }
        let mut index = 2;
        while index < k && em[index] != 0x00 {
            index += 1;
        }
        if index - 2 < MIN_PS_LEN || index >= k {
            return Err(RsaError::InvalidEncodedMessage);
        }

        Ok(em[index + 1..].to_vec())
    }

    /// Signs `msg`: `T` is the DigestInfo prefix followed by the
    /// SHA-256 of the message, framed as `00 01 FF.. 00 T` and pushed
    /// through the private primitive.
    pub fn sign_pkcs1v15(&self, msg: &[u8], algorithm: HashAlgorithm) -> Result<Vec<u8>, RsaError> {
        let info = digest_info_for(algorithm);
        if !info.supported {
            return Err(RsaError::HashNotSupported(algorithm));
        }

        let digest = sha256(msg);
        let t_len = info.prefix.len() + info.digest_len;
        let k = self.modulus_len();
        if k < t_len + MIN_PADDING {
            return Err(RsaError::MessageTooShort);
        }

        let mut em = vec![0xFFu8; k];
        em[0] = 0x00;
        em[1] = 0x01;
        em[k - t_len - 1] = 0x00;
        em[k - t_len..k - info.digest_len].copy_from_slice(info.prefix);
        em[k - info.digest_len..].copy_from_slice(digest.as_bytes());

        let m = os2ip(&em, self.n().size());
        let s = m.pow_mod(self.d(), self.n());
        Ok(i2osp(&s, k))
    }
}
