//! Arithmetic operator implementations.
//!
//! The compound assignment operators taking `&Polynomial` hold the actual
//! arithmetic. Every other form (owned or borrowed operands, scalar on
//! either side) copies one operand and delegates to them. A scalar operand
//! acts as a degree-0 polynomial.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use ruffini_rings::traits::Ring;
use ruffini_rings::{FiniteField, Q, Z};

use crate::dense::Polynomial;

impl<T: Ring> AddAssign<&Polynomial<T>> for Polynomial<T> {
    fn add_assign(&mut self, rhs: &Polynomial<T>) {
        let lhs = self.coeffs_mut();
        if lhs.len() < rhs.size() {
            lhs.resize(rhs.size(), T::zero());
        }
        for (a, b) in lhs.iter_mut().zip(rhs.iter()) {
            *a = a.clone() + b.clone();
        }
        self.normalize();
    }
}

impl<T: Ring> SubAssign<&Polynomial<T>> for Polynomial<T> {
    fn sub_assign(&mut self, rhs: &Polynomial<T>) {
        let lhs = self.coeffs_mut();
        if lhs.len() < rhs.size() {
            lhs.resize(rhs.size(), T::zero());
        }
        for (a, b) in lhs.iter_mut().zip(rhs.iter()) {
            *a = a.clone() - b.clone();
        }
        self.normalize();
    }
}

impl<T: Ring> MulAssign<&Polynomial<T>> for Polynomial<T> {
    /// Schoolbook multiplication: O(n·m).
    fn mul_assign(&mut self, rhs: &Polynomial<T>) {
        if self.is_zero() || rhs.is_zero() {
            *self = Polynomial::zero();
            return;
        }

        let lhs = std::mem::take(self.coeffs_mut());
        let rhs = rhs.coeffs();
        let mut product = vec![T::zero(); lhs.len() + rhs.len() - 1];

        for (i, a) in lhs.iter().enumerate() {
            for (j, b) in rhs.iter().enumerate() {
                product[i + j] = product[i + j].clone() + a.clone() * b.clone();
            }
        }

        *self.coeffs_mut() = product;
        self.normalize();
    }
}

impl<T: Ring> AddAssign<T> for Polynomial<T> {
    fn add_assign(&mut self, rhs: T) {
        let c0 = &mut self.coeffs_mut()[0];
        *c0 = c0.clone() + rhs;
        self.normalize();
    }
}

impl<T: Ring> SubAssign<T> for Polynomial<T> {
    fn sub_assign(&mut self, rhs: T) {
        let c0 = &mut self.coeffs_mut()[0];
        *c0 = c0.clone() - rhs;
        self.normalize();
    }
}

impl<T: Ring> MulAssign<T> for Polynomial<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = self.scale(&rhs);
    }
}

/// Derives the owned and borrowed binary forms from a compound assignment.
macro_rules! impl_binop {
    ($($trait:ident :: $method:ident => $assign_trait:ident :: $assign:ident),* $(,)?) => {$(
        impl<T: Ring> $assign_trait<Polynomial<T>> for Polynomial<T> {
            fn $assign(&mut self, rhs: Polynomial<T>) {
                $assign_trait::$assign(self, &rhs);
            }
        }

        impl<T: Ring> $trait<&Polynomial<T>> for &Polynomial<T> {
            type Output = Polynomial<T>;

            fn $method(self, rhs: &Polynomial<T>) -> Self::Output {
                let mut result = self.clone();
                $assign_trait::$assign(&mut result, rhs);
                result
            }
        }

        impl<T: Ring> $trait<Polynomial<T>> for &Polynomial<T> {
            type Output = Polynomial<T>;

            fn $method(self, rhs: Polynomial<T>) -> Self::Output {
                $trait::$method(self, &rhs)
            }
        }

        impl<T: Ring> $trait<&Polynomial<T>> for Polynomial<T> {
            type Output = Polynomial<T>;

            fn $method(mut self, rhs: &Polynomial<T>) -> Self::Output {
                $assign_trait::$assign(&mut self, rhs);
                self
            }
        }

        impl<T: Ring> $trait for Polynomial<T> {
            type Output = Polynomial<T>;

            fn $method(mut self, rhs: Polynomial<T>) -> Self::Output {
                $assign_trait::$assign(&mut self, &rhs);
                self
            }
        }

        impl<T: Ring> $trait<T> for Polynomial<T> {
            type Output = Polynomial<T>;

            fn $method(mut self, rhs: T) -> Self::Output {
                $assign_trait::$assign(&mut self, rhs);
                self
            }
        }

        impl<T: Ring> $trait<T> for &Polynomial<T> {
            type Output = Polynomial<T>;

            fn $method(self, rhs: T) -> Self::Output {
                $trait::$method(self.clone(), rhs)
            }
        }
    )*};
}

impl_binop!(
    Add::add => AddAssign::add_assign,
    Sub::sub => SubAssign::sub_assign,
    Mul::mul => MulAssign::mul_assign,
);

/// Scalar-on-the-left forms for the concrete coefficient types.
///
/// A blanket `impl<T> Add<Polynomial<T>> for T` is not allowed for a
/// foreign `T`, so each coefficient type is listed here.
macro_rules! impl_scalar_lhs {
    ($([$($generics:tt)*] $scalar:ty),* $(,)?) => {$(
        impl<$($generics)*> Add<Polynomial<$scalar>> for $scalar {
            type Output = Polynomial<$scalar>;

            fn add(self, rhs: Polynomial<$scalar>) -> Self::Output {
                rhs + self
            }
        }

        impl<$($generics)*> Add<&Polynomial<$scalar>> for $scalar {
            type Output = Polynomial<$scalar>;

            fn add(self, rhs: &Polynomial<$scalar>) -> Self::Output {
                rhs + self
            }
        }

        impl<$($generics)*> Sub<Polynomial<$scalar>> for $scalar {
            type Output = Polynomial<$scalar>;

            fn sub(self, rhs: Polynomial<$scalar>) -> Self::Output {
                Polynomial::constant(self) - &rhs
            }
        }

        impl<$($generics)*> Sub<&Polynomial<$scalar>> for $scalar {
            type Output = Polynomial<$scalar>;

            fn sub(self, rhs: &Polynomial<$scalar>) -> Self::Output {
                Polynomial::constant(self) - rhs
            }
        }

        impl<$($generics)*> Mul<Polynomial<$scalar>> for $scalar {
            type Output = Polynomial<$scalar>;

            fn mul(self, rhs: Polynomial<$scalar>) -> Self::Output {
                rhs * self
            }
        }

        impl<$($generics)*> Mul<&Polynomial<$scalar>> for $scalar {
            type Output = Polynomial<$scalar>;

            fn mul(self, rhs: &Polynomial<$scalar>) -> Self::Output {
                rhs * self
            }
        }
    )*};
}

impl_scalar_lhs!([] Z, [] Q, [] f64, [const P: u64] FiniteField<P>);

impl<T: Ring> Neg for Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Self::Output {
        self.into_iter().map(|c| -c).collect()
    }
}

impl<T: Ring> Neg for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Self::Output {
        self.iter().map(|c| -c.clone()).collect()
    }
}
