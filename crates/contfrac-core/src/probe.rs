//! Observation hooks for the arithmetic engines.
//!
//! An engine reports every state transition to an optional [`Probe`]. The
//! probe sees the state after the transition has been applied, which makes
//! it possible to track mass and entropy over the life of a computation
//! without touching the engine itself.

use std::f64::consts::LN_2;

use dashu::base::BitTest;

use crate::Mass;

/// A state transition of an arithmetic engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// A term of the left input was absorbed.
    IngestX,
    /// A term of the right input was absorbed.
    IngestY,
    /// A generalized `(numerator, denominator)` pair was absorbed.
    Ingest,
    /// An output term was produced.
    Emit,
    /// An output term was produced after every input ran out.
    Drain,
    /// The engine stopped producing terms.
    Halt,
}

/// Receives engine transitions.
pub trait Probe<S: ?Sized> {
    /// Called after `transition` has been applied to `state`.
    fn observe(&mut self, transition: Transition, state: &S);
}

impl<S: ?Sized, F> Probe<S> for F
where
    F: FnMut(Transition, &S),
{
    fn observe(&mut self, transition: Transition, state: &S) {
        self(transition, state);
    }
}

/// Masses wider than this use the bit-length estimate.
pub const EXACT_ENTROPY_BITS: usize = 1000;

/// The natural logarithm of a mass, `0` for the empty state.
///
/// Masses of more than [`EXACT_ENTROPY_BITS`] bits are estimated as
/// `bit_len · ln 2`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn entropy(mass: &Mass) -> f64 {
    if *mass == Mass::ZERO {
        return 0.0;
    }

    let bits = mass.bit_len();
    if bits > EXACT_ENTROPY_BITS {
        return bits as f64 * LN_2;
    }

    // Only the top 64 bits survive the conversion to f64 anyway.
    let shift = bits.saturating_sub(64);
    match u64::try_from(mass >> shift) {
        Ok(top) => (top as f64).ln() + shift as f64 * LN_2,
        Err(_) => bits as f64 * LN_2,
    }
}
