//! The Matter contract.
//!
//! Every numeric domain the stream machinery runs over implements
//! [`Matter`]. The generators and engines never look past this trait: they
//! add, subtract, multiply, divide with remainder, and ask whether a value
//! is the vacuum.

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

use dashu::integer::UBig;

use crate::MatterError;

/// A non-negative measure of the size of a value.
pub type Mass = UBig;

/// A value in a commutative-ring-like domain with Euclidean division.
///
/// # Laws
///
/// - `vacuum()` is the additive identity and `unit()` the multiplicative one
/// - `is_vacuum()` holds exactly for values equal to `vacuum()`
/// - For any `a`, `b` with `b` non-vacuum, `a.div_rem(&b)` returns `(q, r)`
///   with `a == b * q + r` and `r` smaller than `b` in the domain's norm
pub trait Matter:
    Clone + Debug + PartialEq + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// The additive identity.
    fn vacuum() -> Self;

    /// The multiplicative identity.
    fn unit() -> Self;

    /// The size of this value (magnitude, residue, or coefficient sum).
    fn mass(&self) -> Mass;

    /// Returns true if this is the additive identity.
    fn is_vacuum(&self) -> bool {
        self.mass() == UBig::ZERO
    }

    /// Divides with remainder.
    ///
    /// # Errors
    ///
    /// Returns [`MatterError::DivisionByVacuum`] when `divisor` is vacuum.
    fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), MatterError>;

    /// Returns the additive inverse.
    fn negate(&self) -> Self {
        Self::vacuum() - self.clone()
    }

    /// Returns `unit()` added to itself `n` times.
    fn from_count(n: u64) -> Self {
        let mut result = Self::vacuum();
        let mut base = Self::unit();
        let mut n = n;

        while n > 0 {
            if n & 1 == 1 {
                result = result + base.clone();
            }
            base = base.clone() + base;
            n >>= 1;
        }

        result
    }

    /// Returns `from_count(|n|)` with the sign of `n`.
    fn from_signed(n: i64) -> Self {
        let magnitude = Self::from_count(n.unsigned_abs());
        if n < 0 {
            magnitude.negate()
        } else {
            magnitude
        }
    }
}
