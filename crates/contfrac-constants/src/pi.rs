//! π from its odd-square generalized continued fraction.

use contfrac_core::{ContinuedFraction, Homographic, Stream};
use contfrac_matter::Matter;
use tracing::debug;

/// GCF pairs for π − 3: `(1, 0)`, then `((2n − 1)², 6)` for `n ≥ 2`.
pub fn gcf_source<M: Matter>() -> impl Iterator<Item = (M, M)> {
    let first = std::iter::once((M::unit(), M::vacuum()));
    let rest = (2u64..).map(|n| {
        let odd = M::from_count(2 * n - 1);
        (odd.clone() * odd, M::from_count(6))
    });
    first.chain(rest)
}

/// π as `[3; 7, 15, 1, 292, …]`.
#[must_use]
pub fn pi<M: Matter + 'static>() -> ContinuedFraction<M> {
    debug!("starting pi transducer");
    // The fraction part expands as [0; 7, 15, …]; its leading zero is
    // replaced by the integer part.
    let fraction = Homographic::new(gcf_source::<M>())
        .enumerate()
        .filter(|(index, term)| !(*index == 0 && matches!(term, Ok(t) if t.is_vacuum())))
        .map(|(_, term)| term);
    let terms = std::iter::once(Ok(M::from_count(3))).chain(fraction);
    ContinuedFraction::from_stream(Stream::new(terms))
}
