//! Configuration for the root-isolation generator.

/// Limits for [`algebraic`](crate::algebraic).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlgebraicConfig {
    /// Maximum number of terms to produce before stopping.
    pub max_terms: usize,
    /// Largest integer probed while looking for a sign change.
    pub scan_bound: u64,
}

impl Default for AlgebraicConfig {
    fn default() -> Self {
        Self {
            max_terms: 1000,
            scan_bound: 1000,
        }
    }
}

impl AlgebraicConfig {
    /// Sets the maximum number of terms.
    pub fn with_max_terms(mut self, max_terms: usize) -> Self {
        self.max_terms = max_terms;
        self
    }

    /// Sets the scan bound.
    pub fn with_scan_bound(mut self, scan_bound: u64) -> Self {
        self.scan_bound = scan_bound;
        self
    }
}
