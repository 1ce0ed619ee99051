//! # ruffini-poly
//!
//! Dense univariate polynomial arithmetic over a generic coefficient ring.
//!
//! This crate provides:
//! - `Polynomial<T>`: canonical dense storage, lowest degree first
//! - Ring operators (`+`, `-`, `*`, negation) with scalar operands
//! - Evaluation and composition by Horner's method
//! - Long division (`/`, `%`) and monic GCD over a field
//! - `Display` rendering such as `2*x^2-x+1`
//!
//! ## Example
//!
//! ```
//! use ruffini_poly::{monic_gcd_reduce, Polynomial};
//! use ruffini_rings::Q;
//!
//! let p: Polynomial<Q> = [-1, 0, 1].into_iter().map(Q::from_integer).collect();
//! let r: Polynomial<Q> = [-1, 1].into_iter().map(Q::from_integer).collect();
//!
//! assert_eq!(p.to_string(), "x^2-1");
//! assert_eq!((&p / &r).to_string(), "x+1");
//! assert_eq!(monic_gcd_reduce(&p, &r)?, r);
//! # Ok::<(), ruffini_poly::PolyError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod dense;
mod display;
pub mod error;
mod ops;

#[cfg(test)]
mod proptests;

pub use algorithms::division::poly_div_rem;
pub use algorithms::gcd::monic_gcd_reduce;
pub use dense::Polynomial;
pub use error::PolyError;
