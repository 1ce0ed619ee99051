//! Dense univariate polynomials.
//!
//! A polynomial owns a coefficient vector in ascending degree order. Every
//! constructor and every mutating operator re-establishes the canonical
//! form, so two equal polynomials always have identical storage.

use std::ops::Index;

use ruffini_rings::traits::Ring;

/// A dense univariate polynomial.
///
/// Coefficients are stored in ascending degree order: index `i` holds the
/// coefficient of x^i.
///
/// # Invariants
///
/// - The coefficient vector is never empty; zero is stored as `[0]`.
/// - The highest stored coefficient is non-zero unless the polynomial is
///   zero.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Polynomial<T: Ring> {
    /// Coefficients in ascending degree order.
    coeffs: Vec<T>,
}

impl<T: Ring> Polynomial<T> {
    /// Creates a polynomial from coefficients, lowest degree first.
    #[must_use]
    pub fn new(coeffs: Vec<T>) -> Self {
        let mut p = Self { coeffs };
        p.normalize();
        p
    }

    /// Creates a polynomial from a slice of coefficients.
    #[must_use]
    pub fn from_slice(coeffs: &[T]) -> Self {
        Self::new(coeffs.to_vec())
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![T::zero()],
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(T::one())
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: T) -> Self {
        Self::new(vec![c])
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::monomial(T::one(), 1)
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(c: T, n: usize) -> Self {
        let mut coeffs = vec![T::zero(); n + 1];
        coeffs[n] = c;
        Self::new(coeffs)
    }

    /// Returns the degree, or -1 for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> isize {
        if self.is_zero() {
            return -1;
        }
        // A Vec never holds more than isize::MAX elements.
        #[allow(clippy::cast_possible_wrap)]
        let degree = (self.coeffs.len() - 1) as isize;
        degree
    }

    /// Returns the number of stored coefficients (1 for zero).
    #[must_use]
    pub fn size(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Returns the leading coefficient; zero for the zero polynomial.
    #[must_use]
    pub fn leading_coeff(&self) -> &T {
        &self.coeffs[self.coeffs.len() - 1]
    }

    /// Returns the coefficient of x^i, or zero when `i` exceeds the degree.
    #[must_use]
    pub fn coeff(&self, i: usize) -> T {
        self.coeffs.get(i).cloned().unwrap_or_else(T::zero)
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// Consumes the polynomial, returning its coefficients.
    #[must_use]
    pub fn into_coeffs(self) -> Vec<T> {
        self.coeffs
    }

    /// Iterates over the coefficients, lowest degree first.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.coeffs.iter()
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &T) -> T {
        self.coeffs
            .iter()
            .rev()
            .fold(T::zero(), |acc, c| acc * x.clone() + c.clone())
    }

    /// Evaluates the polynomial at every point of `xs`.
    #[must_use]
    pub fn eval_many(&self, xs: &[T]) -> Vec<T> {
        xs.iter().map(|x| self.eval(x)).collect()
    }

    /// Computes the composition `self(other(x))`.
    ///
    /// Runs Horner's scheme with a polynomial accumulator.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        let mut acc = Self::zero();
        for c in self.coeffs.iter().rev() {
            acc *= other;
            acc += c.clone();
        }
        acc
    }

    /// Multiplies every coefficient by a scalar.
    #[must_use]
    pub fn scale(&self, c: &T) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        self.coeffs.iter().map(|x| x.clone() * c.clone()).collect()
    }

    /// Multiplies by x^n.
    #[must_use]
    pub fn shift(&self, n: usize) -> Self {
        if self.is_zero() || n == 0 {
            return self.clone();
        }

        let mut coeffs = vec![T::zero(); n];
        coeffs.extend(self.coeffs.iter().cloned());
        Self { coeffs }
    }

    /// Raises the polynomial to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result *= &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }

        result
    }

    /// Computes the formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        // i * c_i, with i accumulated inside T so positive characteristic works.
        let mut k = T::zero();
        self.coeffs
            .iter()
            .skip(1)
            .map(|c| {
                k = k.clone() + T::one();
                k.clone() * c.clone()
            })
            .collect()
    }

    /// Gives operator impls direct access to storage.
    ///
    /// Callers must call [`Self::normalize`] after mutating.
    pub(crate) fn coeffs_mut(&mut self) -> &mut Vec<T> {
        &mut self.coeffs
    }

    /// Strips trailing zero coefficients, keeping at least one.
    pub(crate) fn normalize(&mut self) {
        let len = self
            .coeffs
            .iter()
            .rposition(|c| !c.is_zero())
            .map_or(1, |i| i + 1);
        self.coeffs.truncate(len);
        if self.coeffs.is_empty() {
            self.coeffs.push(T::zero());
        }
    }
}

impl<T: Ring> Default for Polynomial<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Ring> From<T> for Polynomial<T> {
    fn from(c: T) -> Self {
        Self::constant(c)
    }
}

impl<T: Ring> From<Vec<T>> for Polynomial<T> {
    fn from(coeffs: Vec<T>) -> Self {
        Self::new(coeffs)
    }
}

impl<T: Ring> FromIterator<T> for Polynomial<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: Ring> Index<usize> for Polynomial<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `i >= self.size()`; use [`Polynomial::coeff`] for a total read.
    fn index(&self, i: usize) -> &T {
        &self.coeffs[i]
    }
}

impl<'a, T: Ring> IntoIterator for &'a Polynomial<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.coeffs.iter()
    }
}

impl<T: Ring> IntoIterator for Polynomial<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.coeffs.into_iter()
    }
}
