//! The Euclidean algorithm as a term generator.
//!
//! `euclid(p, q)` expands the ratio `p/q` into continued-fraction terms by
//! repeated division with remainder. The expansion is finite whenever the
//! domain's division strictly shrinks the remainder.

use contfrac_matter::Matter;

use crate::Result;

/// Lazy quotient sequence of `numerator / denominator`.
#[derive(Clone, Debug)]
pub struct Euclid<M> {
    pair: Option<(M, M)>,
}

/// Starts the Euclidean expansion of `numerator / denominator`.
///
/// A vacuum denominator yields an empty expansion.
pub fn euclid<M: Matter>(numerator: M, denominator: M) -> Euclid<M> {
    Euclid {
        pair: Some((numerator, denominator)),
    }
}

impl<M: Matter> Iterator for Euclid<M> {
    type Item = Result<M>;

    fn next(&mut self) -> Option<Self::Item> {
        let (numerator, denominator) = self.pair.take()?;
        if denominator.is_vacuum() {
            return None;
        }

        match numerator.div_rem(&denominator) {
            Ok((quotient, remainder)) => {
                self.pair = Some((denominator, remainder));
                Some(Ok(quotient))
            }
            Err(err) => Some(Err(err.into())),
        }
    }
}

/// Folds a finite term list back into a ratio `(p, q)`.
///
/// Starts from the last term and applies `a_k + 1/prev` going backwards,
/// kept as a numerator/denominator pair so no division happens. Returns
/// `None` for an empty list.
pub fn fold<M: Matter>(terms: &[M]) -> Option<(M, M)> {
    let (last, rest) = terms.split_last()?;
    let mut p = last.clone();
    let mut q = M::unit();

    for term in rest.iter().rev() {
        let next = term.clone() * p.clone() + q;
        q = std::mem::replace(&mut p, next);
    }

    Some((p, q))
}

/// Returns the successive convergents `p_k / q_k` of a term list.
pub fn convergents<M: Matter>(terms: &[M]) -> Vec<(M, M)> {
    let mut result = Vec::with_capacity(terms.len());
    let (mut p_prev, mut p) = (M::vacuum(), M::unit());
    let (mut q_prev, mut q) = (M::unit(), M::vacuum());

    for term in terms {
        let p_next = term.clone() * p.clone() + p_prev;
        let q_next = term.clone() * q.clone() + q_prev;
        p_prev = std::mem::replace(&mut p, p_next);
        q_prev = std::mem::replace(&mut q, q_next);
        result.push((p.clone(), q.clone()));
    }

    result
}
