//! The field of rational numbers Q.

use crate::traits::{Field, Ring};
use num_traits::{One, Zero};
use ruffini_integers::Rational;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// The field of rational numbers.
///
/// Wraps `ruffini_integers::Rational` and implements the coefficient
/// traits.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Q(pub Rational);

impl Q {
    /// Creates a rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        Self(Rational::from_i64(num, den))
    }

    /// Creates a rational from an integer.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(Rational::from(n))
    }
}

impl Ring for Q {
    fn zero() -> Self {
        Self(Rational::zero())
    }

    fn one() -> Self {
        Self(Rational::one())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }
}

impl Field for Q {
    fn inv(&self) -> Option<Self> {
        self.0.checked_recip().map(Self)
    }
}

macro_rules! impl_binop {
    ($($trait:ident :: $method:ident),* $(,)?) => {$(
        impl $trait for Q {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                Self($trait::$method(self.0, rhs.0))
            }
        }
    )*};
}

// Rational division panics on a zero divisor.
impl_binop!(Add::add, Sub::sub, Mul::mul, Div::div);

impl Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<Rational> for Q {
    fn from(value: Rational) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Q {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
