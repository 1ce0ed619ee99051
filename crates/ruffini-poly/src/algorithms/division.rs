//! Polynomial long division.
//!
//! Division is defined over a [`Field`]: each quotient term is the ratio of
//! two leading coefficients, which must be exact for the remainder's
//! degree to drop.

use std::ops::{Div, DivAssign, Rem, RemAssign};

use ruffini_rings::traits::Field;
use tracing::trace;

use crate::dense::Polynomial;
use crate::error::{PolyError, Result};

/// Divides `a` by `b`, returning `(quotient, remainder)`.
///
/// The remainder is zero or has degree strictly below `b`'s, and
/// `quotient * b + remainder == a`.
///
/// # Errors
///
/// - [`PolyError::DivisionByZero`] if `b` is the zero polynomial.
/// - [`PolyError::NonInvertibleLeadingCoefficient`] if `b`'s leading
///   coefficient is not a unit of `F`.
pub fn poly_div_rem<F: Field>(
    a: &Polynomial<F>,
    b: &Polynomial<F>,
) -> Result<(Polynomial<F>, Polynomial<F>)> {
    if b.is_zero() {
        return Err(PolyError::DivisionByZero);
    }

    let lead_inv = b
        .leading_coeff()
        .inv()
        .ok_or(PolyError::NonInvertibleLeadingCoefficient)?;

    if a.degree() < b.degree() {
        return Ok((Polynomial::zero(), a.clone()));
    }

    let divisor = b.coeffs();
    let m = divisor.len();
    let mut remainder = a.coeffs().to_vec();
    let mut quotient = vec![F::zero(); remainder.len() - m + 1];

    while remainder.len() >= m {
        let shift = remainder.len() - m;
        let term = remainder[remainder.len() - 1].clone() * lead_inv.clone();

        // The top coefficient cancels by construction; it is popped rather
        // than computed so inexact coefficients cannot stall the loop.
        for (i, d) in divisor[..m - 1].iter().enumerate() {
            remainder[shift + i] = remainder[shift + i].clone() - term.clone() * d.clone();
        }
        remainder.pop();
        while remainder.last().is_some_and(|c| c.is_zero()) {
            remainder.pop();
        }

        trace!(shift, remaining = remainder.len(), "long division step");
        quotient[shift] = term;
    }

    Ok((Polynomial::new(quotient), Polynomial::new(remainder)))
}

impl<F: Field> Polynomial<F> {
    /// Divides by `divisor`, returning `(quotient, remainder)`.
    ///
    /// # Errors
    ///
    /// See [`poly_div_rem`].
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        poly_div_rem(self, divisor)
    }

    /// Returns the quotient of long division by `divisor`.
    ///
    /// # Errors
    ///
    /// See [`poly_div_rem`].
    pub fn checked_div(&self, divisor: &Self) -> Result<Self> {
        poly_div_rem(self, divisor).map(|(q, _)| q)
    }

    /// Returns the remainder of long division by `divisor`.
    ///
    /// # Errors
    ///
    /// See [`poly_div_rem`].
    pub fn checked_rem(&self, divisor: &Self) -> Result<Self> {
        poly_div_rem(self, divisor).map(|(_, r)| r)
    }

    /// Divides every coefficient by the scalar `c`.
    ///
    /// This agrees with dividing by the degree-0 polynomial `c`, including
    /// which error is reported.
    ///
    /// # Errors
    ///
    /// - [`PolyError::DivisionByZero`] if `c` is zero.
    /// - [`PolyError::NonInvertibleLeadingCoefficient`] if `c` is nonzero but
    ///   not a unit of `F`.
    pub fn checked_div_scalar(&self, c: &F) -> Result<Self> {
        if c.is_zero() {
            return Err(PolyError::DivisionByZero);
        }
        let inv = c.inv().ok_or(PolyError::NonInvertibleLeadingCoefficient)?;
        Ok(self.scale(&inv))
    }

    /// Scales the polynomial so its leading coefficient is one.
    ///
    /// The zero polynomial is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::NonInvertibleLeadingCoefficient`] if the leading
    /// coefficient is not a unit.
    pub fn make_monic(&self) -> Result<Self> {
        if self.is_zero() {
            return Ok(self.clone());
        }
        self.checked_div_scalar(self.leading_coeff())
    }
}

fn unwrap_division<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{e}"),
    }
}

impl<F: Field> DivAssign<&Polynomial<F>> for Polynomial<F> {
    /// Replaces `self` with the quotient, discarding the remainder.
    ///
    /// # Panics
    ///
    /// Panics if the divisor is zero or its leading coefficient is not
    /// invertible. Use [`Polynomial::checked_div`] to handle these cases.
    fn div_assign(&mut self, rhs: &Polynomial<F>) {
        *self = unwrap_division(self.checked_div(rhs));
    }
}

impl<F: Field> RemAssign<&Polynomial<F>> for Polynomial<F> {
    /// # Panics
    ///
    /// Panics under the same conditions as `/=`.
    fn rem_assign(&mut self, rhs: &Polynomial<F>) {
        *self = unwrap_division(self.checked_rem(rhs));
    }
}

impl<F: Field> DivAssign<F> for Polynomial<F> {
    /// Divides every coefficient by the scalar.
    ///
    /// # Panics
    ///
    /// Panics if the scalar is zero or has no inverse. Use
    /// [`Polynomial::checked_div_scalar`] to handle these cases.
    fn div_assign(&mut self, rhs: F) {
        *self = unwrap_division(self.checked_div_scalar(&rhs));
    }
}

macro_rules! impl_division_ops {
    ($($trait:ident :: $method:ident => $assign_trait:ident :: $assign:ident),* $(,)?) => {$(
        impl<F: Field> $assign_trait<Polynomial<F>> for Polynomial<F> {
            fn $assign(&mut self, rhs: Polynomial<F>) {
                $assign_trait::$assign(self, &rhs);
            }
        }

        impl<F: Field> $trait<&Polynomial<F>> for &Polynomial<F> {
            type Output = Polynomial<F>;

            fn $method(self, rhs: &Polynomial<F>) -> Self::Output {
                let mut result = self.clone();
                $assign_trait::$assign(&mut result, rhs);
                result
            }
        }

        impl<F: Field> $trait<Polynomial<F>> for &Polynomial<F> {
            type Output = Polynomial<F>;

            fn $method(self, rhs: Polynomial<F>) -> Self::Output {
                $trait::$method(self, &rhs)
            }
        }

        impl<F: Field> $trait<&Polynomial<F>> for Polynomial<F> {
            type Output = Polynomial<F>;

            fn $method(mut self, rhs: &Polynomial<F>) -> Self::Output {
                $assign_trait::$assign(&mut self, rhs);
                self
            }
        }

        impl<F: Field> $trait for Polynomial<F> {
            type Output = Polynomial<F>;

            fn $method(mut self, rhs: Polynomial<F>) -> Self::Output {
                $assign_trait::$assign(&mut self, &rhs);
                self
            }
        }
    )*};
}

impl_division_ops!(
    Div::div => DivAssign::div_assign,
    Rem::rem => RemAssign::rem_assign,
);

impl<F: Field> Div<F> for Polynomial<F> {
    type Output = Polynomial<F>;

    fn div(mut self, rhs: F) -> Self::Output {
        self /= rhs;
        self
    }
}

impl<F: Field> Div<F> for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn div(self, rhs: F) -> Self::Output {
        self.clone() / rhs
    }
}
