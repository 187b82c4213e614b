//! Errors raised by domain arithmetic.

use thiserror::Error;

/// Failures of a single [`Matter::div_rem`](crate::Matter::div_rem) call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatterError {
    /// The divisor was the additive identity.
    #[error("division by vacuum")]
    DivisionByVacuum,

    /// The divisor is non-zero but has no inverse (composite modulus).
    #[error("{0} is not invertible")]
    NotInvertible(String),
}
