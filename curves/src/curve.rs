use torreon_primitives::BigUint;

use crate::point::{Coordinates, CurvePoint, PointSign};

/// Ways of writing a curve equation. Only the short Weierstrass form
/// `y^2 = x^3 + ax + b` has working arithmetic here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveExpression {
    ShortWeierstrass,
    Montgomery,
    Edwards,
}

/// Domain parameters of a curve over the prime field F_p.
///
/// All parameters are expected to share one width; `p` fixes the limb
/// size every point coordinate is computed at.
#[derive(Debug, Clone)]
pub struct EllipticCurve {
    pub p: BigUint,
    pub a: BigUint,
    pub b: BigUint,
    pub g_x: BigUint,
    pub g_y: BigUint,
    /// Order of the generator
    pub n: BigUint,
    /// Cofactor
    pub h: BigUint,
    pub supports_montgomery_form: bool,
    pub supports_edwards_form: bool,
    pub default_expression: CurveExpression,
}

impl EllipticCurve {
    /// Limb width every coordinate is held at.
    pub fn limb_size(&self) -> usize {
        self.p.size()
    }

    /// Whether `(x, y)` satisfies `y^2 = x^3 + ax + b (mod p)`.
    pub fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        let lhs = y.mul_mod(y, &self.p);
        let x_squared = x.mul_mod(x, &self.p);
        let x_cubed = x_squared.mul_mod(x, &self.p);
        let rhs = x_cubed
            .add_mod(&x.mul_mod(&self.a, &self.p), &self.p)
            .add_mod(&self.b, &self.p);
        lhs == rhs
    }

    /// The generator as an affine point.
    pub fn generator(&self) -> CurvePoint {
        CurvePoint {
            x: self.g_x.clone(),
            y: self.g_y.clone(),
            z: BigUint::new(self.limb_size()),
            infinity: false,
            sign: PointSign::LowerHalf,
            coord: Coordinates::Affine,
            expression: self.default_expression,
        }
    }
}
