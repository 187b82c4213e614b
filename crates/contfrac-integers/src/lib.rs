//! # contfrac-integers
//!
//! Arbitrary precision integer backends for contfrac.
//!
//! This crate wraps `dashu` to provide:
//! - [`Integer`]: a signed integer stored as a single `IBig`
//! - [`Tally`]: a signed integer stored as a sign flag plus a `UBig` magnitude
//! - [`ModInt`]: integers modulo a compile-time prime
//!
//! `Integer` and `Tally` are two representations of the same ring and agree
//! on every operation, including truncated division: the quotient rounds
//! toward zero and the remainder carries the sign of the dividend.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod modular;
pub mod tally;

#[cfg(test)]
mod proptests;

pub use dashu::integer::UBig;
pub use integer::Integer;
pub use modular::ModInt;
pub use tally::Tally;
