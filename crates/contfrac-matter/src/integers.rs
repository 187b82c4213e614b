//! Matter implementations for the integer backends.

use contfrac_integers::{Integer, Tally};
use dashu::integer::UBig;
use num_traits::{One, Zero};

use crate::{Mass, Matter, MatterError};

impl Matter for Integer {
    fn vacuum() -> Self {
        Self::zero()
    }

    fn unit() -> Self {
        Self::one()
    }

    fn mass(&self) -> Mass {
        self.magnitude()
    }

    fn is_vacuum(&self) -> bool {
        self.is_zero()
    }

    fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), MatterError> {
        self.checked_div_rem(divisor)
            .ok_or(MatterError::DivisionByVacuum)
    }

    fn negate(&self) -> Self {
        -self.clone()
    }

    fn from_count(n: u64) -> Self {
        Self::from(n)
    }
}

impl Matter for Tally {
    fn vacuum() -> Self {
        Self::zero()
    }

    fn unit() -> Self {
        Self::one()
    }

    fn mass(&self) -> Mass {
        self.magnitude().clone()
    }

    fn is_vacuum(&self) -> bool {
        self.is_zero()
    }

    fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), MatterError> {
        self.checked_div_rem(divisor)
            .ok_or(MatterError::DivisionByVacuum)
    }

    fn negate(&self) -> Self {
        -self.clone()
    }

    fn from_count(n: u64) -> Self {
        Self::from_parts(false, UBig::from(n))
    }
}
