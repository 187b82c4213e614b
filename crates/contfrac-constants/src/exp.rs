//! The exponential function at integral points.

use contfrac_core::{gcf_to_scf, ContinuedFraction};
use contfrac_matter::Matter;
use tracing::debug;

/// GCF pairs for `eˣ`: `(2x, 1)`, `(x², 2 − x)`, then `(x², 4k + 2)` for
/// `k ≥ 1`.
pub fn gcf_source<M: Matter>(x: M) -> impl Iterator<Item = (M, M)> {
    let two = M::from_count(2);
    let square = x.clone() * x.clone();
    let head = [
        (two.clone() * x.clone(), M::unit()),
        (square.clone(), two - x),
    ];
    let tail = (1u64..).map(move |k| (square.clone(), M::from_count(4 * k + 2)));
    head.into_iter().chain(tail)
}

/// `eˣ` as a continued fraction.
///
/// `e⁰` is returned as `[1]` directly: its source never pins a digit.
#[must_use]
pub fn exp<M: Matter + 'static>(x: M) -> ContinuedFraction<M> {
    if x.is_vacuum() {
        return ContinuedFraction::from_terms(vec![M::unit()]);
    }
    debug!(?x, "starting exp transducer");
    ContinuedFraction::from_stream(gcf_to_scf(gcf_source(x)))
}
