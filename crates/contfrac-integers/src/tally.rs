//! Sign-magnitude integers.
//!
//! A [`Tally`] keeps the sign apart from an unsigned magnitude, the way a
//! count of strokes is either added or owed. Arithmetic is dispatched on the
//! pair of signs instead of relying on a two's-complement style big integer,
//! which makes it an independent second backend for cross-checking
//! [`Integer`](crate::Integer).

use dashu::integer::UBig;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::Integer;

/// A signed integer stored as `(negative, magnitude)`.
///
/// Zero is always stored as non-negative.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Tally {
    negative: bool,
    magnitude: UBig,
}

impl Tally {
    /// Creates a tally from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self::from_parts(value < 0, UBig::from(value.unsigned_abs()))
    }

    /// A non-negative tally of `n` strokes.
    #[must_use]
    pub fn up(n: u64) -> Self {
        Self::from_parts(false, UBig::from(n))
    }

    /// A negative tally of `n` strokes.
    #[must_use]
    pub fn down(n: u64) -> Self {
        Self::from_parts(true, UBig::from(n))
    }

    /// Builds a tally from a sign flag and magnitude, normalizing zero.
    #[must_use]
    pub fn from_parts(negative: bool, magnitude: UBig) -> Self {
        let negative = negative && !magnitude.is_zero();
        Self { negative, magnitude }
    }

    /// Returns true if the tally is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns the number of strokes, ignoring the sign.
    #[must_use]
    pub fn magnitude(&self) -> &UBig {
        &self.magnitude
    }

    /// Consumes the tally, returning its magnitude.
    #[must_use]
    pub fn into_magnitude(self) -> UBig {
        self.magnitude
    }

    /// Truncated division on magnitudes.
    ///
    /// The quotient is negative when the signs differ; the remainder keeps
    /// the sign of `self`. Returns `None` when `divisor` is zero.
    #[must_use]
    pub fn checked_div_rem(&self, divisor: &Self) -> Option<(Self, Self)> {
        if divisor.magnitude.is_zero() {
            return None;
        }
        let q = &self.magnitude / &divisor.magnitude;
        let r = &self.magnitude % &divisor.magnitude;
        Some((
            Self::from_parts(self.negative != divisor.negative, q),
            Self::from_parts(self.negative, r),
        ))
    }

    /// Attempts to convert to an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        let magnitude: u64 = self.magnitude.clone().try_into().ok()?;
        if self.negative {
            0i64.checked_sub_unsigned(magnitude)
        } else {
            i64::try_from(magnitude).ok()
        }
    }

    fn combine(&self, negative: bool, magnitude: &UBig) -> Self {
        if self.negative == negative {
            return Self::from_parts(negative, &self.magnitude + magnitude);
        }
        // Opposite signs annihilate; the larger pile keeps its sign.
        match self.magnitude.cmp(magnitude) {
            Ordering::Less => Self::from_parts(negative, magnitude - &self.magnitude),
            Ordering::Equal => Self::zero(),
            Ordering::Greater => Self::from_parts(self.negative, &self.magnitude - magnitude),
        }
    }
}

impl Zero for Tally {
    fn zero() -> Self {
        Self::from_parts(false, UBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }
}

impl One for Tally {
    fn one() -> Self {
        Self::from_parts(false, UBig::ONE)
    }

    fn is_one(&self) -> bool {
        !self.negative && self.magnitude == UBig::ONE
    }
}

impl PartialOrd for Tally {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tally {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl fmt::Debug for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "S({})", self.magnitude)
        } else {
            write!(f, "U({})", self.magnitude)
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-{}", self.magnitude)
        } else {
            write!(f, "{}", self.magnitude)
        }
    }
}

impl Add for Tally {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.combine(rhs.negative, &rhs.magnitude)
    }
}

impl Sub for Tally {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.combine(!rhs.negative, &rhs.magnitude)
    }
}

impl Mul for Tally {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::from_parts(self.negative != rhs.negative, self.magnitude * rhs.magnitude)
    }
}

impl Neg for Tally {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_parts(!self.negative, self.magnitude)
    }
}

impl From<i64> for Tally {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Integer> for Tally {
    fn from(value: Integer) -> Self {
        Self::from_parts(value.is_negative(), value.magnitude())
    }
}
