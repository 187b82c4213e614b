//! # contfrac-core
//!
//! Exact arithmetic on lazily produced continued-fraction term streams.
//!
//! This crate provides:
//! - [`Stream`]: a single-slot lookahead over a possibly infinite producer
//! - [`euclid`]: the generalized Euclidean term generator, plus [`fold`] and
//!   [`convergents`] to turn terms back into ratios
//! - [`algebraic`]: the root-isolation generator for real algebraic numbers
//! - [`ContinuedFraction`]: a value type with `+ - * /`
//! - [`GosperEngine`]: the bihomographic state machine behind the operators
//! - [`Homographic`]: the GCF → SCF transducer
//!
//! ## Data flow
//!
//! ```text
//! Matter ─► euclid / algebraic ─► Stream ─► ContinuedFraction
//!                                              │   (+ - * /)
//!                                              ▼
//!                               GosperEngine ─► Stream ─► ContinuedFraction
//! GCF pairs ─► Homographic ─► Stream
//! ```
//!
//! Every engine pulls its inputs synchronously and only as far as it needs
//! to prove the next output term. Nothing is ever rounded.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algebraic;
pub mod config;
pub mod continued_fraction;
pub mod error;
pub mod euclid;
pub mod gosper;
pub mod homographic;
pub mod probe;
pub mod stream;

#[cfg(test)]
mod proptests;

pub use algebraic::{algebraic, Algebraic};
pub use config::AlgebraicConfig;
pub use continued_fraction::ContinuedFraction;
pub use error::{Error, Result};
pub use euclid::{convergents, euclid, fold, Euclid};
pub use gosper::{GosperEngine, GosperState, Operation, PullOrder};
pub use homographic::{gcf_to_scf, Homographic, HomographicState};
pub use probe::{entropy, Probe, Transition, EXACT_ENTROPY_BITS};
pub use stream::Stream;

pub use contfrac_matter::{Mass, Matter, MatterError};
