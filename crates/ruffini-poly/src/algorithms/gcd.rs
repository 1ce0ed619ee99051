//! Polynomial GCD over a field.

use ruffini_rings::traits::Field;
use tracing::{debug, trace};

use crate::algorithms::division::poly_div_rem;
use crate::dense::Polynomial;
use crate::error::Result;

/// Reduces `(a, b)` by the Euclidean algorithm and returns the last
/// non-zero remainder scaled to be monic.
///
/// Each step replaces `(a, b)` with `(b, a % b)` until `b` is zero; the
/// surviving `a` is then divided coefficient-wise by its leading
/// coefficient. For non-zero inputs over a field this is their greatest
/// common divisor. Coprime inputs give the constant `1`; two zero inputs
/// give zero.
///
/// # Errors
///
/// Propagates [`PolyError::NonInvertibleLeadingCoefficient`] when a
/// remainder's leading coefficient is not a unit, which only happens for
/// coefficient rings that are not fields.
///
/// [`PolyError::NonInvertibleLeadingCoefficient`]: crate::PolyError::NonInvertibleLeadingCoefficient
pub fn monic_gcd_reduce<F: Field>(a: &Polynomial<F>, b: &Polynomial<F>) -> Result<Polynomial<F>> {
    let mut a = a.clone();
    let mut b = b.clone();

    while !b.is_zero() {
        let (_, r) = poly_div_rem(&a, &b)?;
        trace!(
            dividend = a.degree(),
            divisor = b.degree(),
            remainder = r.degree(),
            "euclidean step"
        );
        a = std::mem::replace(&mut b, r);
    }

    let gcd = a.make_monic()?;
    debug!(degree = gcd.degree(), "monic gcd");
    Ok(gcd)
}

impl<F: Field> Polynomial<F> {
    /// Returns the monic GCD of `self` and `other`.
    ///
    /// # Errors
    ///
    /// See [`monic_gcd_reduce`].
    pub fn gcd(&self, other: &Self) -> Result<Self> {
        monic_gcd_reduce(self, other)
    }
}
