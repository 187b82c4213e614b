//! # contfrac
//!
//! Exact real arithmetic on lazily produced continued-fraction streams.
//!
//! A real number is held as the stream of its continued-fraction terms
//! `[a₀; a₁, a₂, …]`. Rationals have finite streams; algebraic and
//! transcendental numbers have infinite ones. Arithmetic on two streams is
//! Gosper's bihomographic algorithm: it pulls input terms only until the
//! next output term is certain, so every prefix is exact.
//!
//! ## Features
//!
//! - **Pluggable numerics**: any domain implementing [`Matter`](prelude::Matter)
//!   (big integers, sign-magnitude tallies, prime and extension fields,
//!   Gaussian integers, polynomials)
//! - **Lazy arithmetic**: `+ - * /` on [`ContinuedFraction`](prelude::ContinuedFraction)
//! - **Algebraic numbers**: root isolation for polynomial roots
//! - **Constants**: π, `eˣ` and `ln(1 + x)` from generalized continued
//!   fractions
//!
//! ## Quick Start
//!
//! ```rust
//! use contfrac::prelude::*;
//!
//! let sqrt2 = algebraic(
//!     Polynomial::new(vec![Integer::new(-2), Integer::new(0), Integer::new(1)]),
//!     &AlgebraicConfig::default(),
//! );
//! let x = ContinuedFraction::from_stream(Stream::new(sqrt2));
//! let y = ContinuedFraction::from_ratio(Integer::new(1), Integer::new(1));
//!
//! // `x` never ends, so take turns between the operands.
//! let sum = ContinuedFraction::combine_with(x, y, Operation::Add.state(), PullOrder::Alternating);
//! let terms: Vec<i64> = sum
//!     .take(4)
//!     .map(|t| t.unwrap().to_i64().unwrap())
//!     .collect();
//! assert_eq!(terms, vec![2, 2, 2, 2]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use contfrac_constants as constants;
pub use contfrac_core as engine;
pub use contfrac_integers as integers;
pub use contfrac_matter as matter;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use contfrac_constants::{exp, log, pi};
    pub use contfrac_core::{
        algebraic, euclid, fold, gcf_to_scf, AlgebraicConfig, ContinuedFraction, Error,
        GosperEngine, GosperState, Operation, Probe, PullOrder, Stream, Transition,
    };
    pub use contfrac_integers::{Integer, ModInt, Tally};
    pub use contfrac_matter::{
        FieldModulus, Galois, Gaussian, Mass, Matter, MatterError, Polynomial,
    };
}
