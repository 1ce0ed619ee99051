//! Error type for fallible polynomial operations.

use thiserror::Error;

/// Errors raised by polynomial division and the operations built on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// The divisor (a polynomial or a scalar) is zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The divisor's leading coefficient has no multiplicative inverse.
    #[error("leading coefficient of the divisor is not invertible")]
    NonInvertibleLeadingCoefficient,
}

/// Result type for polynomial operations.
pub type Result<T> = std::result::Result<T, PolyError>;
