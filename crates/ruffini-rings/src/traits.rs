//! Coefficient capability traits.
//!
//! Polynomial operations are generic over these traits rather than over
//! ad hoc operator bounds, so the full requirement on a coefficient type
//! is visible in one place.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A commutative ring with identity.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative and commutative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
///
/// Floating point types satisfy these laws only approximately.
pub trait Ring:
    Clone
    + PartialEq
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// The additive inverse of `one()`.
    fn neg_one() -> Self {
        -Self::one()
    }

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool {
        *self == Self::one()
    }

    /// Computes self^n by repeated squaring.
    #[must_use]
    fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            exp >>= 1;
            if exp > 0 {
                base = base.clone() * base;
            }
        }

        result
    }
}

/// A ring in which every non-zero element has a multiplicative inverse.
///
/// `Div` must agree with multiplication by `inv()`; it may panic when the
/// divisor is zero.
pub trait Field: Ring + Div<Output = Self> {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero, or more generally not a unit.
    fn inv(&self) -> Option<Self>;

    /// Divides by `other`, returning `None` if `other` is not invertible.
    fn checked_div(&self, other: &Self) -> Option<Self> {
        other.inv().map(|inv| self.clone() * inv)
    }
}
