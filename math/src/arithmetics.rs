//! Euclidean algorithms: gcd, lcm, the extended form with Bezout
//! coefficients, and modular inverses.

use torreon_primitives::BigUint;

/// Sign attached to an otherwise unsigned Bezout coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Negative,
    Positive,
}

/// Result of [`extended_euclidean`].
///
/// The contract is `a * s * s_sign + b * t * t_sign = gcd`, where `s`
/// and `t` are the raw (wrapped) unsigned coefficients. A negative
/// coefficient is stored as its wraparound value; its canonical
/// nonnegative representative is `s + b` (respectively `t + a`).
#[derive(Debug, Clone)]
pub struct ExtendedEuclidean {
    pub gcd: BigUint,
    pub s: BigUint,
    pub t: BigUint,
    pub s_sign: Sign,
    pub t_sign: Sign,
}

/// Greatest common divisor by the Euclidean algorithm.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let size = a.size().max(b.size());
    let mut x = a.resized(size);
    let mut y = b.resized(size);

    while !y.is_zero() {
        let rem = x.div_rem(&y).1;
        x = y;
        y = rem;
    }
    x
}

/// Least common multiple via `a * b / gcd(a, b)`, zero when either
/// operand is zero.
///
/// The product is formed in double-width storage, so the result is
/// exact whenever the lcm itself fits the operand width.
pub fn lcm(a: &BigUint, b: &BigUint) -> BigUint {
    let size = a.size().max(b.size());
    if a.is_zero() || b.is_zero() {
        return BigUint::new(size);
    }

    let product = a.resized(size).mul_wide(&b.resized(size));
    let divisor = gcd(a, b).resized(product.size());
    product.div_rem(&divisor).0.resized(size)
}

// Checks the Bezout identity in its modular form, a * coeff = gcd (mod m),
// using the raw unsigned coefficient. A wrapped (negative) coefficient
// carries an extra 2^(64n) term that survives the reduction, so the check
// holding tells the coefficient's sign.
fn bezout_identity_mod_holds(a: &BigUint, coeff: &BigUint, m: &BigUint, gcd: &BigUint) -> bool {
    let product = a.mul_wide(coeff);
    let rem = product.div_rem(&m.resized(product.size())).1;
    rem == *gcd
}

/// Extended Euclidean algorithm with sign recovery.
///
/// Intermediate coefficients are allowed to wrap around the fixed
/// width; the final signs are recovered by testing whether the modular
/// Bezout identity holds for the raw values.
pub fn extended_euclidean(a: &BigUint, b: &BigUint) -> ExtendedEuclidean {
    let size = a.size().max(b.size());
    let mut r_prev = a.resized(size);
    let mut r_cur = b.resized(size);
    let mut s_prev = BigUint::one(size);
    let mut s_cur = BigUint::new(size);
    let mut t_prev = BigUint::new(size);
    let mut t_cur = BigUint::one(size);

    while !r_cur.is_zero() {
        let quot = r_prev.div_rem(&r_cur).0;

        // x = x_{i-1} - q_i * x_i, wrapping on negative values
        let r_next = &r_prev - &(&quot * &r_cur);
        let s_next = &s_prev - &(&quot * &s_cur);
        let t_next = &t_prev - &(&quot * &t_cur);

        r_prev = std::mem::replace(&mut r_cur, r_next);
        s_prev = std::mem::replace(&mut s_cur, s_next);
        t_prev = std::mem::replace(&mut t_cur, t_next);
    }

    let s_sign = if bezout_identity_mod_holds(a, &s_prev, b, &r_prev) {
        Sign::Positive
    } else {
        Sign::Negative
    };
    let t_sign = if bezout_identity_mod_holds(b, &t_prev, a, &r_prev) {
        Sign::Positive
    } else {
        Sign::Negative
    };

    ExtendedEuclidean {
        gcd: r_prev,
        s: s_prev,
        t: t_prev,
        s_sign,
        t_sign,
    }
}

/// The multiplicative inverse of `a` modulo `n`, or `None` when
/// `gcd(a, n) != 1` and no inverse exists.
pub fn inverse_mod(a: &BigUint, n: &BigUint) -> Option<BigUint> {
    let result = extended_euclidean(a, n);
    if result.gcd != BigUint::one(1) {
        return None;
    }

    let mut s = result.s;
    if result.s_sign == Sign::Negative {
        // the wraparound cancels: raw + n is the canonical representative
        s.overflowing_add_assign(n);
    }
    Some(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(value: u64) -> BigUint {
        BigUint::from_u64(value, 4)
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(&big(48), &big(18)), big(6));
        assert_eq!(gcd(&big(18), &big(48)), big(6));
        assert_eq!(gcd(&big(17), &big(31)), big(1));
        assert_eq!(gcd(&big(0), &big(5)), big(5));
        assert_eq!(gcd(&big(5), &big(0)), big(5));
    }

    #[test]
    fn test_lcm() {
        assert_eq!(lcm(&big(4), &big(6)), big(12));
        assert_eq!(lcm(&big(21), &big(6)), big(42));
        assert!(lcm(&big(0), &big(6)).is_zero());
        assert!(lcm(&big(6), &big(0)).is_zero());
    }

    #[test]
    fn test_lcm_needs_wide_product() {
        // a * b overflows the 256-bit width but the lcm itself fits
        let a = &BigUint::one(4) << 200;
        let b = &BigUint::one(4) << 199;
        assert_eq!(lcm(&a, &b), a);
    }

    #[test]
    fn test_extended_euclidean() {
        // gcd(240, 46) = 2 = 240 * (-9) + 46 * 47
        let result = extended_euclidean(&big(240), &big(46));
        assert_eq!(result.gcd, big(2));
        assert_eq!(result.s_sign, Sign::Negative);
        assert_eq!(result.t_sign, Sign::Positive);
        assert_eq!(result.t, big(47));

        // the canonical nonnegative s is s + b = 46 - 9 = 37
        let mut canonical = result.s;
        canonical.overflowing_add_assign(&big(46));
        assert_eq!(canonical, big(37));
    }

    #[test]
    fn test_extended_euclidean_identity() {
        let pairs = [(240u64, 46u64), (65537, 3120), (1, 1), (17, 17), (99991, 2)];
        for (a, b) in pairs {
            let result = extended_euclidean(&big(a), &big(b));
            assert_eq!(result.gcd, gcd(&big(a), &big(b)));

            // check a * s + b * t = gcd in i128 arithmetic
            let reconstruct = |coeff: &BigUint, sign: Sign, modulus: u64| -> i128 {
                let canonical = if sign == Sign::Negative {
                    let mut c = coeff.clone();
                    c.overflowing_add_assign(&big(modulus));
                    c
                } else {
                    coeff.clone()
                };
                let value = canonical.limbs()[0] as i128;
                if sign == Sign::Negative {
                    value - modulus as i128
                } else {
                    value
                }
            };

            let s = reconstruct(&result.s, result.s_sign, b);
            let t = reconstruct(&result.t, result.t_sign, a);
            let r = result.gcd.limbs()[0] as i128;
            assert_eq!(a as i128 * s + b as i128 * t, r, "a={} b={}", a, b);
        }
    }

    #[test]
    fn test_inverse_mod() {
        // 3 * 5 = 15 = 1 (mod 7)
        assert_eq!(inverse_mod(&big(3), &big(7)), Some(big(5)));
        // 65537 is its own test case from RSA: 65537 * d = 1 (mod 3120)
        let d = inverse_mod(&big(65537), &big(3120)).unwrap();
        assert_eq!(big(65537).mul_mod(&d, &big(3120)), big(1));
        // no inverse when gcd != 1
        assert_eq!(inverse_mod(&big(6), &big(9)), None);
        assert_eq!(inverse_mod(&big(0), &big(9)), None);
    }
}
