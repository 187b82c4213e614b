//! # contfrac-constants
//!
//! Transcendental constants as exact continued-fraction streams.
//!
//! Each constant is given by a generalized continued fraction source (an
//! infinite iterator of `(numerator, denominator)` pairs) and transduced
//! into simple terms with [`contfrac_core::gcf_to_scf`]:
//!
//! - [`pi()`]: π = 3 + 1²/(6 + 3²/(6 + 5²/(6 + …)))
//! - [`exp()`]: eˣ for integral `x`
//! - [`log()`]: ln(1 + x) for non-negative integral `x`
//!
//! All three are generic over the [`Matter`](contfrac_matter::Matter)
//! backend; their sources build every coefficient from
//! [`Matter::from_count`](contfrac_matter::Matter::from_count).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod exp;
pub mod log;
pub mod pi;

pub use exp::exp;
pub use log::log;
pub use pi::pi;
