//! The ring of integers Z.

use crate::traits::Ring;
use ruffini_integers::Integer;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// The ring of integers.
///
/// `Z` is not a [`Field`](crate::Field): its `/` truncates toward zero, so
/// polynomial long division is not offered over it.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Z(pub Integer);

impl Z {
    /// Creates a new integer.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(Integer::new(value))
    }
}

impl Ring for Z {
    fn zero() -> Self {
        Self::new(0)
    }

    fn one() -> Self {
        Self::new(1)
    }

    fn is_zero(&self) -> bool {
        self.0.signum() == 0
    }
}

macro_rules! impl_binop {
    ($($trait:ident :: $method:ident),* $(,)?) => {$(
        impl $trait for Z {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                Self($trait::$method(self.0, rhs.0))
            }
        }
    )*};
}

impl_binop!(Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem);

impl Neg for Z {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Z {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Integer> for Z {
    fn from(value: Integer) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Z {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
