//! Continued fractions of real algebraic numbers.
//!
//! The generator tracks a polynomial whose positive root is the remaining
//! tail of the expansion. Each step scans `k = 0, 1, 2, ...` for the first
//! sign change of `P`, emits `k`, and substitutes `x → 1/(x − k)` so the
//! next tail is again the root of a polynomial.

use contfrac_matter::{Matter, Polynomial};
use tracing::{debug, trace};

use crate::{AlgebraicConfig, Error, Result};

enum Floor<M> {
    /// `P(k) == 0`: the tail is exactly `k`.
    Root(M),
    /// The root lies in `[k, k + 1)`.
    Between(M),
}

/// Lazy continued-fraction terms of the positive root of a polynomial.
pub struct Algebraic<M> {
    poly: Option<Polynomial<M>>,
    config: AlgebraicConfig,
    emitted: usize,
}

/// Starts expanding the positive real root of `poly`.
///
/// The polynomial must change sign exactly once on the positive axis
/// beyond its integer part, as it does for a simple root of `P(x) = 0`.
pub fn algebraic<M>(poly: Polynomial<M>, config: &AlgebraicConfig) -> Algebraic<M>
where
    M: Matter + PartialOrd,
{
    Algebraic {
        poly: Some(poly),
        config: config.clone(),
        emitted: 0,
    }
}

impl<M: Matter + PartialOrd> Algebraic<M> {
    fn isolate_floor(&self, poly: &Polynomial<M>) -> Result<Floor<M>> {
        let zero = M::vacuum();
        let at_zero = poly.evaluate(&zero);
        if at_zero.is_vacuum() {
            return Ok(Floor::Root(zero));
        }

        let start_positive = at_zero > zero;
        let mut k = M::vacuum();
        let mut steps = 0u64;

        loop {
            let next = k.clone() + M::unit();
            let value = poly.evaluate(&next);
            if value.is_vacuum() {
                return Ok(Floor::Root(next));
            }
            if (value > zero) != start_positive {
                return Ok(Floor::Between(k));
            }

            k = next;
            steps += 1;
            if steps > self.config.scan_bound {
                return Err(Error::RootIsolation {
                    bound: self.config.scan_bound,
                });
            }
        }
    }
}

impl<M: Matter + PartialOrd> Iterator for Algebraic<M> {
    type Item = Result<M>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.emitted >= self.config.max_terms {
            return None;
        }
        let poly = self.poly.take()?;
        self.emitted += 1;

        match self.isolate_floor(&poly) {
            Ok(Floor::Root(k)) => {
                trace!(term = ?k, "exact root reached");
                Some(Ok(k))
            }
            Ok(Floor::Between(k)) => {
                let next = poly.shift(&k).reverse();
                trace!(term = ?k, degree = next.degree(), "isolated floor");
                if !next.is_constant() {
                    self.poly = Some(next);
                }
                Some(Ok(k))
            }
            Err(err) => {
                debug!(%err, "root isolation failed");
                Some(Err(err))
            }
        }
    }
}
