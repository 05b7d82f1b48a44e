//! Elliptic curve points over prime fields, written in short
//! Weierstrass form. The affine group law is complete; projective and
//! compressed points are supported through conversion to affine.

mod curve;
mod error;
mod point;
mod short_weierstrass;

pub mod secp256k1;

pub use curve::{CurveExpression, EllipticCurve};
pub use error::CurveError;
pub use point::{Coordinates, CurvePoint, PointSign};
pub use short_weierstrass::{
    generator_mul, point_add, point_double, point_inverse, point_mul, point_sub,
};
