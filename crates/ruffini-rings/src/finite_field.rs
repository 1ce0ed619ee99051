//! Prime fields Z/pZ.

use crate::traits::{Field, Ring};
use ruffini_integers::ModInt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// The field Z/pZ for a prime `P`.
///
/// Instantiating with a composite `P` yields a ring whose zero divisors
/// report `None` from [`Field::inv`]. Elements order by their canonical
/// representative in `0..P`, so none of them compares below zero.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct FiniteField<const P: u64>(pub ModInt<P>);

impl<const P: u64> FiniteField<P> {
    /// Creates a new field element.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(ModInt::new(value))
    }

    /// Creates a field element from a signed value.
    #[must_use]
    pub fn from_signed(value: i64) -> Self {
        Self(ModInt::from_signed(value))
    }

    /// Returns the canonical representative.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0.value()
    }
}

impl<const P: u64> Ring for FiniteField<P> {
    fn zero() -> Self {
        Self::new(0)
    }

    fn one() -> Self {
        Self::new(1)
    }

    fn is_zero(&self) -> bool {
        self.0.value() == 0
    }
}

impl<const P: u64> Field for FiniteField<P> {
    fn inv(&self) -> Option<Self> {
        self.0.inv().map(Self)
    }
}

macro_rules! impl_binop {
    ($($trait:ident :: $method:ident),* $(,)?) => {$(
        impl<const P: u64> $trait for FiniteField<P> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                Self($trait::$method(self.0, rhs.0))
            }
        }
    )*};
}

impl_binop!(Add::add, Sub::sub, Mul::mul, Div::div);

impl<const P: u64> Neg for FiniteField<P> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl<const P: u64> From<u64> for FiniteField<P> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<const P: u64> From<i64> for FiniteField<P> {
    fn from(value: i64) -> Self {
        Self::from_signed(value)
    }
}

impl<const P: u64> std::fmt::Display for FiniteField<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// GF(2), the field with two elements.
pub type GF2 = FiniteField<2>;

/// The prime field of order 998244353.
pub type GF998244353 = FiniteField<{ ruffini_integers::modular::primes::P998244353 }>;
