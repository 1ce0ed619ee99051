//! Coefficient traits for machine floating point numbers.
//!
//! Arithmetic is inexact, so the ring and field laws hold only up to
//! rounding. Values that are exactly representable (small integers,
//! dyadic fractions) behave exactly.

use crate::traits::{Field, Ring};

impl Ring for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn is_zero(&self) -> bool {
        *self == 0.0
    }
}

impl Field for f64 {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() || !self.is_finite() {
            None
        } else {
            Some(self.recip())
        }
    }
}
