//! # ruffini-rings
//!
//! Coefficient structures for Ruffini polynomials.
//!
//! This crate provides:
//! - The capability traits `Ring` and `Field` that bound polynomial
//!   coefficients
//! - Concrete coefficient types: Z, Q, Z/pZ
//! - `Ring`/`Field` for `f64`
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring        (+, -, *, negation, 0, 1, -1)
//!  └── Field  (adds /, inverses)
//! ```
//!
//! Ordering is not part of either trait; only formatting, which needs to
//! decide signs, asks for `PartialOrd`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod finite_field;
pub mod integers;
pub mod primitive;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use finite_field::FiniteField;
pub use integers::Z;
pub use rationals::Q;
pub use traits::{Field, Ring};
