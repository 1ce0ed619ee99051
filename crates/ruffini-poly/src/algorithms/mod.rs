//! Polynomial algorithms over a coefficient field.
//!
//! - Long division with remainder
//! - Monic GCD by the Euclidean algorithm

pub mod division;
pub mod gcd;
