//! secp256k1 domain parameters.

use lazy_static::lazy_static;
use torreon_primitives::BigUint;

use crate::curve::{CurveExpression, EllipticCurve};
use crate::point::CurvePoint;

const LIMBS: usize = 4; // 256 bits

fn param(decimal: &str) -> BigUint {
    BigUint::from_dec_str(decimal, LIMBS).expect("secp256k1 constants are valid decimals")
}

lazy_static! {
    /// The Bitcoin curve `y^2 = x^3 + 7` over F_p,
    /// p = 2^256 - 2^32 - 977.
    pub static ref SECP256K1: EllipticCurve = EllipticCurve {
        p: param("115792089237316195423570985008687907853269984665640564039457584007908834671663"),
        a: param("0"),
        b: param("7"),
        g_x: param("55066263022277343669578718895168534326250603453777594175500187360389116729240"),
        g_y: param("32670510020758816978083085130507043184471273380659243275938904335757337482424"),
        n: param("115792089237316195423570985008687907852837564279074904382605163141518161494337"),
        h: param("1"),
        supports_montgomery_form: false,
        supports_edwards_form: false,
        default_expression: CurveExpression::ShortWeierstrass,
    };
}

/// The secp256k1 generator point G.
pub fn generator() -> CurvePoint {
    SECP256K1.generator()
}
