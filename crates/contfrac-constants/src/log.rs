//! The natural logarithm `ln(1 + x)`.

use contfrac_core::{gcf_to_scf, ContinuedFraction};
use contfrac_matter::Matter;
use tracing::debug;

/// GCF pairs for `ln(1 + x)`: `(x, 0)`, then `(⌈k/2⌉²·x, k)` for `k ≥ 1`.
///
/// That is `x/(1 + 1²x/(2 + 1²x/(3 + 2²x/(4 + 2²x/(5 + …)))))`.
pub fn gcf_source<M: Matter>(x: M) -> impl Iterator<Item = (M, M)> {
    let head = std::iter::once((x.clone(), M::vacuum()));
    let tail = (1u64..).map(move |k| {
        let half = M::from_count(k.div_ceil(2));
        (half.clone() * half * x.clone(), M::from_count(k))
    });
    head.chain(tail)
}

/// `ln(1 + x)` as a continued fraction, for non-negative `x`.
#[must_use]
pub fn log<M: Matter + 'static>(x: M) -> ContinuedFraction<M> {
    if x.is_vacuum() {
        return ContinuedFraction::from_terms(vec![M::vacuum()]);
    }
    debug!(?x, "starting log transducer");
    ContinuedFraction::from_stream(gcf_to_scf(gcf_source(x)))
}
