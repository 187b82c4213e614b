//! Error types for stream evaluation.

use contfrac_matter::MatterError;
use thiserror::Error;

/// Errors surfaced while pulling terms.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A domain division failed; passed through unchanged.
    #[error(transparent)]
    Matter(#[from] MatterError),

    /// The stream has no more terms. This is the normal end of a finite
    /// expansion, not a failure.
    #[error("stream is exhausted")]
    Exhausted,

    /// No sign change was found within the configured scan bound.
    #[error("failed to isolate root: no sign change within {bound} steps")]
    RootIsolation {
        /// The scan bound that was exceeded.
        bound: u64,
    },
}

/// Result type for stream operations.
pub type Result<T> = std::result::Result<T, Error>;
