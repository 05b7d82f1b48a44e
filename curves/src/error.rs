use thiserror::Error;

/// Errors raised by curve point operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveError {
    /// Operands live in different coordinate systems
    #[error("points are in different coordinate systems")]
    PointsCoordMismatch,

    /// Operands are written in different curve expressions
    #[error("points are written in different curve expressions")]
    PointsExpressionMismatch,

    /// The curve cannot be written in the requested expression
    #[error("curve does not support the requested expression")]
    CurveDoesNotSupportExpression,

    /// The coordinates do not satisfy the curve equation, or cannot be
    /// normalized over the curve's field
    #[error("point is not on the curve")]
    InvalidPoint,
}
