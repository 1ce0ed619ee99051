//! # Ruffini
//!
//! Dense univariate polynomial arithmetic in Rust.
//!
//! ## Features
//!
//! - **Generic coefficients**: anything implementing `Ring`; division and
//!   GCD over anything implementing `Field`
//! - **Exact arithmetic**: big integers, rationals and prime fields
//! - **Full operator set**: `+ - * / %`, negation, scalar operands
//! - **Horner evaluation and composition**
//! - **Readable output**: `2*x^2-x+1`
//!
//! ## Quick Start
//!
//! ```
//! use ruffini::prelude::*;
//!
//! let p: Polynomial<Q> = [1, 0, 1].into_iter().map(Q::from_integer).collect();
//! let shift: Polynomial<Q> = [-1, 1].into_iter().map(Q::from_integer).collect();
//!
//! assert_eq!(p.to_string(), "x^2+1");
//! assert_eq!(p.compose(&shift).to_string(), "x^2-2*x+2");
//! assert_eq!(p.eval(&Q::from_integer(3)), Q::from_integer(10));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use ruffini_integers as integers;
pub use ruffini_poly as poly;
pub use ruffini_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use ruffini_integers::{Integer, ModInt, Rational};
    pub use ruffini_poly::{monic_gcd_reduce, PolyError, Polynomial};
    pub use ruffini_rings::{Field, FiniteField, Ring, Q, Z};
}
