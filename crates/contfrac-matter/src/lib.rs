//! # contfrac-matter
//!
//! The numeric-value contract for contfrac and the domains that satisfy it.
//!
//! This crate provides:
//! - The [`Matter`] trait: mass, vacuum test, ring operations and
//!   Euclidean division with remainder
//! - Implementations for both integer backends (`Integer`, `Tally`)
//!   and prime fields (`ModInt<P>`)
//! - Extension fields [`Galois`] over a [`FieldModulus`]
//! - Gaussian integers [`Gaussian`] with nearest-rounding division
//! - Dense polynomials [`Polynomial`] with long division, Taylor shift
//!   and coefficient reversal
//!
//! ## Division norms
//!
//! ```text
//! Integer / Tally   |r| < |b|, r has the sign of a (truncation)
//! ModInt<P>         r = 0
//! Galois<P, Q>      r = 0
//! Gaussian<M>       N(r) < N(b) (rounding to the nearest lattice point)
//! Polynomial<M>     leading coefficient of r no longer divisible
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod finite_field;
pub mod galois;
pub mod gaussian;
pub mod integers;
pub mod polynomial;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use contfrac_integers::{Integer, ModInt, Tally};
pub use error::MatterError;
pub use galois::{FieldModulus, Galois};
pub use gaussian::Gaussian;
pub use polynomial::Polynomial;
pub use traits::{Mass, Matter};
