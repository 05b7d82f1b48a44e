use torreon_math::inverse_mod;
use torreon_primitives::BigUint;

use crate::curve::{CurveExpression, EllipticCurve};
use crate::error::CurveError;

/// Coordinate systems a point can be held in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coordinates {
    Affine,
    Projective,
    Compressed,
}

/// Which square root of the curve equation a compressed point keeps:
/// the one below the field midpoint or the one above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointSign {
    LowerHalf,
    UpperHalf,
}

/// A point on an elliptic curve.
///
/// The meaning of the coordinate fields depends on `coord`: affine
/// points use `(x, y)`, projective points `(x, y, z)`, compressed
/// points only `x` plus `sign`. The identity is flagged through
/// `infinity` in every system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurvePoint {
    pub x: BigUint,
    pub y: BigUint,
    pub z: BigUint,
    pub infinity: bool,
    pub sign: PointSign,
    pub coord: Coordinates,
    pub expression: CurveExpression,
}

impl CurvePoint {
    /// The identity element, representable in every coordinate system.
    pub fn infinity(curve: &EllipticCurve, coord: Coordinates) -> Self {
        let size = curve.limb_size();
        CurvePoint {
            x: BigUint::new(size),
            y: BigUint::new(size),
            z: BigUint::new(size),
            infinity: true,
            sign: PointSign::LowerHalf,
            coord,
            expression: curve.default_expression,
        }
    }

    /// An affine point, validated against the curve equation.
    pub fn from_affine(
        curve: &EllipticCurve,
        x: BigUint,
        y: BigUint,
    ) -> Result<Self, CurveError> {
        if !curve.is_on_curve(&x, &y) {
            return Err(CurveError::InvalidPoint);
        }
        Ok(CurvePoint {
            sign: sign_of(&y, curve),
            x,
            y,
            z: BigUint::new(curve.limb_size()),
            infinity: false,
            coord: Coordinates::Affine,
            expression: curve.default_expression,
        })
    }

    /// A projective point `(x : y : z)`; `z = 0` encodes the identity.
    pub fn from_projective(
        curve: &EllipticCurve,
        x: BigUint,
        y: BigUint,
        z: BigUint,
    ) -> Result<Self, CurveError> {
        if z.is_zero() {
            return Ok(CurvePoint::infinity(curve, Coordinates::Projective));
        }

        let point = CurvePoint {
            x,
            y,
            z,
            infinity: false,
            sign: PointSign::LowerHalf,
            coord: Coordinates::Projective,
            expression: curve.default_expression,
        };
        // normalizing validates the affine coordinates
        point.to_affine(curve)?;
        Ok(point)
    }

    /// A compressed point: the x coordinate and the half of the field
    /// its y lives in.
    pub fn from_compressed(
        curve: &EllipticCurve,
        x: BigUint,
        sign: PointSign,
    ) -> Result<Self, CurveError> {
        let point = CurvePoint {
            x,
            y: BigUint::new(curve.limb_size()),
            z: BigUint::new(curve.limb_size()),
            infinity: false,
            sign,
            coord: Coordinates::Compressed,
            expression: curve.default_expression,
        };
        // decompression proves x is a valid abscissa
        point.to_affine(curve)?;
        Ok(point)
    }

    /// Normalizes into affine coordinates.
    ///
    /// Projective points divide by `z`; compressed points recover y as
    /// a modular square root, which needs `p = 3 (mod 4)` (true for
    /// the curves shipped here).
    pub fn to_affine(&self, curve: &EllipticCurve) -> Result<CurvePoint, CurveError> {
        if self.infinity {
            return Ok(CurvePoint::infinity(curve, Coordinates::Affine));
        }

        match self.coord {
            Coordinates::Affine => Ok(self.clone()),
            Coordinates::Projective => {
                let z_inv = inverse_mod(&self.z, &curve.p).ok_or(CurveError::InvalidPoint)?;
                let x = self.x.mul_mod(&z_inv, &curve.p);
                let y = self.y.mul_mod(&z_inv, &curve.p);
                if !curve.is_on_curve(&x, &y) {
                    return Err(CurveError::InvalidPoint);
                }
                Ok(CurvePoint {
                    sign: sign_of(&y, curve),
                    x,
                    y,
                    z: BigUint::new(curve.limb_size()),
                    infinity: false,
                    coord: Coordinates::Affine,
                    expression: self.expression,
                })
            }
            Coordinates::Compressed => {
                let y = decompress_y(curve, &self.x, self.sign)?;
                Ok(CurvePoint {
                    sign: self.sign,
                    x: self.x.clone(),
                    y,
                    z: BigUint::new(curve.limb_size()),
                    infinity: false,
                    coord: Coordinates::Affine,
                    expression: self.expression,
                })
            }
        }
    }

    /// Re-expresses the point in projective coordinates with `z = 1`.
    pub fn to_projective(&self, curve: &EllipticCurve) -> Result<CurvePoint, CurveError> {
        if self.infinity {
            return Ok(CurvePoint::infinity(curve, Coordinates::Projective));
        }

        let affine = self.to_affine(curve)?;
        Ok(CurvePoint {
            z: BigUint::one(curve.limb_size()),
            coord: Coordinates::Projective,
            ..affine
        })
    }

    /// Drops the y coordinate, keeping only which half of the field it
    /// was in.
    pub fn to_compressed(&self, curve: &EllipticCurve) -> Result<CurvePoint, CurveError> {
        if self.infinity {
            return Ok(CurvePoint::infinity(curve, Coordinates::Compressed));
        }

        let affine = self.to_affine(curve)?;
        Ok(CurvePoint {
            y: BigUint::new(curve.limb_size()),
            sign: sign_of(&affine.y, curve),
            coord: Coordinates::Compressed,
            ..affine
        })
    }

    /// Re-expresses the point in another curve equation form. Only the
    /// short Weierstrass form is available.
    pub fn to_expression(
        &self,
        curve: &EllipticCurve,
        expression: CurveExpression,
    ) -> Result<CurvePoint, CurveError> {
        match expression {
            CurveExpression::ShortWeierstrass => {
                if self.expression != CurveExpression::ShortWeierstrass {
                    return Err(CurveError::CurveDoesNotSupportExpression);
                }
                Ok(self.clone())
            }
            CurveExpression::Montgomery if !curve.supports_montgomery_form => {
                Err(CurveError::CurveDoesNotSupportExpression)
            }
            CurveExpression::Edwards if !curve.supports_edwards_form => {
                Err(CurveError::CurveDoesNotSupportExpression)
            }
            // the conversion formulas are not implemented for any
            // shipped curve
            _ => Err(CurveError::CurveDoesNotSupportExpression),
        }
    }
}

// Which half of the field a y coordinate falls in; the midpoint
// (p - 1) / 2 itself counts as the lower half.
pub(crate) fn sign_of(y: &BigUint, curve: &EllipticCurve) -> PointSign {
    if *y > &curve.p >> 1 {
        PointSign::UpperHalf
    } else {
        PointSign::LowerHalf
    }
}

// Recovers y from x as a square root of x^3 + ax + b, picking the root
// in the half of the field `sign` asks for. Uses the p = 3 (mod 4)
// shortcut y = rhs^((p + 1) / 4).
fn decompress_y(
    curve: &EllipticCurve,
    x: &BigUint,
    sign: PointSign,
) -> Result<BigUint, CurveError> {
    if curve.p.limbs()[0] & 3 != 3 {
        return Err(CurveError::InvalidPoint);
    }

    let p = &curve.p;
    let x_squared = x.mul_mod(x, p);
    let x_cubed = x_squared.mul_mod(x, p);
    let rhs = x_cubed
        .add_mod(&x.mul_mod(&curve.a, p), p)
        .add_mod(&curve.b, p);

    let size = curve.limb_size();
    let mut exponent = p.resized(size + 1);
    exponent.overflowing_add_assign(&BigUint::one(1));
    exponent >>= 2;
    let mut y = rhs.pow_mod(&exponent.resized(size), p);

    // a non-residue has no square root: x is not on the curve
    if y.mul_mod(&y, p) != rhs {
        return Err(CurveError::InvalidPoint);
    }

    if !y.is_zero() && sign_of(&y, curve) != sign {
        let mut other = p.clone();
        other.overflowing_sub_assign(&y);
        y = other;
    }
    Ok(y)
}
