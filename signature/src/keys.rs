use log::debug;
use serde::{Deserialize, Serialize};
use torreon_math::{inverse_mod, lcm, random_prime_with_bits};
use torreon_primitives::{BigUint, LIMB_BITS};

/// The fixed public exponent, 2^16 + 1.
pub const PUBLIC_EXPONENT: u64 = 65537;

/// The public half of an RSA key pair: the modulus `n` and the public
/// exponent `e`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsaPublicKey {
    n: BigUint,
    e: BigUint,
}

/// The private half: the modulus `n` and the private exponent `d`.
#[derive(Clone, Serialize, Deserialize)]
pub struct RsaPrivateKey {
    n: BigUint,
    d: BigUint,
}

/// A generated key pair together with its nominal bit size.
#[derive(Clone, Serialize, Deserialize)]
pub struct RsaKeyPair {
    public: RsaPublicKey,
    private: RsaPrivateKey,
    bit_size: usize,
}

impl RsaPublicKey {
    pub fn new(n: BigUint, e: BigUint) -> Self {
        RsaPublicKey { n, e }
    }

    pub fn n(&self) -> &BigUint {
        &self.n
    }

    pub fn e(&self) -> &BigUint {
        &self.e
    }

    /// k, the modulus length in bytes.
    pub fn modulus_len(&self) -> usize {
        (self.n.bits() + 7) / 8
    }
}

impl RsaPrivateKey {
    pub fn new(n: BigUint, d: BigUint) -> Self {
        RsaPrivateKey { n, d }
    }

    pub fn n(&self) -> &BigUint {
        &self.n
    }

    pub fn d(&self) -> &BigUint {
        &self.d
    }

    /// k, the modulus length in bytes.
    pub fn modulus_len(&self) -> usize {
        (self.n.bits() + 7) / 8
    }
}

impl RsaKeyPair {
    /// Generates a fresh key pair.
    ///
    /// Two primes of `bit_size / 2` bits are drawn, the private
    /// exponent is the inverse of 65537 modulo the Carmichael function
    /// `lambda(n) = lcm(p - 1, q - 1)`. The rare draw where 65537 is
    /// not coprime with lambda is thrown away and redone.
    ///
    /// # Panics
    ///
    /// Panics when `bit_size` is not a positive multiple of 128; the
    /// width must split evenly into two prime halves of whole limbs.
    pub fn generate(bit_size: usize) -> Self {
        assert!(
            bit_size >= 2 * LIMB_BITS && bit_size % (2 * LIMB_BITS) == 0,
            "RSA bit size must be a positive multiple of 128"
        );
        let size = bit_size / LIMB_BITS;
        let one = BigUint::one(size);
        let e = BigUint::from_u64(PUBLIC_EXPONENT, size);

        loop {
            let p = random_prime_with_bits(size, bit_size / 2);
            let q = random_prime_with_bits(size, bit_size / 2);

            // both factors fit half the width, the product cannot wrap
            let n = &p * &q;

            let lambda_n = lcm(&(&p - &one), &(&q - &one));
            let d = match inverse_mod(&e, &lambda_n) {
                Some(d) => d,
                None => {
                    debug!("e shares a factor with lambda(n), retrying the draw");
                    continue;
                }
            };

            debug!("generated a {} bit RSA key pair", bit_size);
            return RsaKeyPair {
                public: RsaPublicKey::new(n.clone(), e),
                private: RsaPrivateKey::new(n, d),
                bit_size,
            };
        }
    }

    pub fn public(&self) -> &RsaPublicKey {
        &self.public
    }

    pub fn private(&self) -> &RsaPrivateKey {
        &self.private
    }

    pub fn bit_size(&self) -> usize {
        self.bit_size
    }
}
