//! # ruffini-integers
//!
//! Exact scalar arithmetic backing the coefficient rings of Ruffini.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`)
//! - Integers modulo a compile-time modulus (`ModInt`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod modular;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use modular::ModInt;
pub use rational::Rational;
