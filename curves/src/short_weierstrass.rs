//! The short Weierstrass group law: chord-and-tangent addition,
//! doubling, negation and double-and-add scalar multiplication.
//!
//! Operands may arrive in any coordinate system as long as both share
//! it; the arithmetic itself runs over normalized affine points and
//! the result is handed back in the operands' system.

use torreon_math::inverse_mod;
use torreon_primitives::BigUint;

use crate::curve::{CurveExpression, EllipticCurve};
use crate::error::CurveError;
use crate::point::{sign_of, Coordinates, CurvePoint};

// Only the short Weierstrass law is written out; a curve may declare
// montgomery or edwards support but there is no arithmetic for them.
fn check_expression(point: &CurvePoint) -> Result<(), CurveError> {
    match point.expression {
        CurveExpression::ShortWeierstrass => Ok(()),
        _ => Err(CurveError::CurveDoesNotSupportExpression),
    }
}

fn check_pair(
    curve: &EllipticCurve,
    a: &CurvePoint,
    b: &CurvePoint,
) -> Result<(), CurveError> {
    if a.expression != b.expression {
        return Err(CurveError::PointsExpressionMismatch);
    }
    if a.coord != b.coord {
        return Err(CurveError::PointsCoordMismatch);
    }
    check_expression(a)
}

// Converts an affine result back into the coordinate system the
// operands came in.
fn denormalize(
    curve: &EllipticCurve,
    affine: CurvePoint,
    coord: Coordinates,
) -> Result<CurvePoint, CurveError> {
    match coord {
        Coordinates::Affine => Ok(affine),
        Coordinates::Projective => affine.to_projective(curve),
        Coordinates::Compressed => affine.to_compressed(curve),
    }
}

// Tangent-rule doubling of a normalized affine point.
fn double_affine(curve: &EllipticCurve, a: &CurvePoint) -> Result<CurvePoint, CurveError> {
    if a.infinity {
        return Ok(a.clone());
    }
    // the tangent at y = 0 is vertical
    if a.y.is_zero() {
        return Ok(CurvePoint::infinity(curve, Coordinates::Affine));
    }

    let p = &curve.p;
    let three = BigUint::from_u64(3, curve.limb_size());
    let two = BigUint::from_u64(2, curve.limb_size());

    // lambda = (3 x^2 + a) / 2 y
    let num = a
        .x
        .mul_mod(&a.x, p)
        .mul_mod(&three, p)
        .add_mod(&curve.a, p);
    let denom = a.y.mul_mod(&two, p);
    let lambda = num.mul_mod(&inverse_mod(&denom, p).ok_or(CurveError::InvalidPoint)?, p);

    // x3 = lambda^2 - 2 x, y3 = lambda (x - x3) - y
    let x3 = lambda.mul_mod(&lambda, p).sub_mod(&a.x, p).sub_mod(&a.x, p);
    let y3 = a.x.sub_mod(&x3, p).mul_mod(&lambda, p).sub_mod(&a.y, p);

    affine_point(curve, x3, y3)
}

// Chord-rule addition of two normalized affine points.
fn add_affine(
    curve: &EllipticCurve,
    a: &CurvePoint,
    b: &CurvePoint,
) -> Result<CurvePoint, CurveError> {
    if a.infinity {
        return Ok(b.clone());
    }
    if b.infinity {
        return Ok(a.clone());
    }
    if a.x == b.x {
        // equal points double; mirrored points cancel out
        return if a.y == b.y {
            double_affine(curve, a)
        } else {
            Ok(CurvePoint::infinity(curve, Coordinates::Affine))
        };
    }

    let p = &curve.p;
    // lambda = (y2 - y1) / (x2 - x1)
    let num = b.y.sub_mod(&a.y, p);
    let denom = b.x.sub_mod(&a.x, p);
    let lambda = num.mul_mod(&inverse_mod(&denom, p).ok_or(CurveError::InvalidPoint)?, p);

    // x3 = lambda^2 - x1 - x2, y3 = lambda (x1 - x3) - y1
    let x3 = lambda.mul_mod(&lambda, p).sub_mod(&a.x, p).sub_mod(&b.x, p);
    let y3 = a.x.sub_mod(&x3, p).mul_mod(&lambda, p).sub_mod(&a.y, p);

    affine_point(curve, x3, y3)
}

fn affine_point(curve: &EllipticCurve, x: BigUint, y: BigUint) -> Result<CurvePoint, CurveError> {
    Ok(CurvePoint {
        sign: sign_of(&y, curve),
        x,
        y,
        z: BigUint::new(curve.limb_size()),
        infinity: false,
        coord: Coordinates::Affine,
        expression: CurveExpression::ShortWeierstrass,
    })
}

/// `a + b` by the chord rule; equal operands fall through to the
/// tangent rule.
pub fn point_add(
    curve: &EllipticCurve,
    a: &CurvePoint,
    b: &CurvePoint,
) -> Result<CurvePoint, CurveError> {
    check_pair(curve, a, b)?;
    let sum = add_affine(curve, &a.to_affine(curve)?, &b.to_affine(curve)?)?;
    denormalize(curve, sum, a.coord)
}

/// `a - b`, added through the inverse of `b`.
pub fn point_sub(
    curve: &EllipticCurve,
    a: &CurvePoint,
    b: &CurvePoint,
) -> Result<CurvePoint, CurveError> {
    check_pair(curve, a, b)?;
    let negated = negate_affine(curve, &b.to_affine(curve)?);
    let sum = add_affine(curve, &a.to_affine(curve)?, &negated)?;
    denormalize(curve, sum, a.coord)
}

/// The tangent-rule doubling `2a`.
pub fn point_double(curve: &EllipticCurve, a: &CurvePoint) -> Result<CurvePoint, CurveError> {
    check_expression(a)?;
    let doubled = double_affine(curve, &a.to_affine(curve)?)?;
    denormalize(curve, doubled, a.coord)
}

/// The group inverse `-a = (x, -y)`.
pub fn point_inverse(curve: &EllipticCurve, a: &CurvePoint) -> Result<CurvePoint, CurveError> {
    check_expression(a)?;
    let negated = negate_affine(curve, &a.to_affine(curve)?);
    denormalize(curve, negated, a.coord)
}

fn negate_affine(curve: &EllipticCurve, a: &CurvePoint) -> CurvePoint {
    if a.infinity || a.y.is_zero() {
        return a.clone();
    }

    let mut y = curve.p.clone();
    y.overflowing_sub_assign(&a.y);
    CurvePoint {
        sign: sign_of(&y, curve),
        x: a.x.clone(),
        y,
        z: BigUint::new(curve.limb_size()),
        infinity: false,
        coord: Coordinates::Affine,
        expression: a.expression,
    }
}

/// Scalar multiplication `n * a` by double-and-add over the bits of
/// `n`, most significant first.
pub fn point_mul(
    curve: &EllipticCurve,
    a: &CurvePoint,
    n: &BigUint,
) -> Result<CurvePoint, CurveError> {
    check_expression(a)?;
    let base = a.to_affine(curve)?;

    let mut acc = CurvePoint::infinity(curve, Coordinates::Affine);
    for i in (0..n.bits()).rev() {
        acc = double_affine(curve, &acc)?;
        if n.bit(i) {
            acc = add_affine(curve, &acc, &base)?;
        }
    }
    denormalize(curve, acc, a.coord)
}

/// `n * G` for the curve's generator.
pub fn generator_mul(curve: &EllipticCurve, n: &BigUint) -> Result<CurvePoint, CurveError> {
    point_mul(curve, &curve.generator(), n)
}
