//! Prime fields Z_p as Matter.
//!
//! In a field every division is exact, so the remainder is always the
//! vacuum and a Euclid expansion stops after a single term.

use contfrac_integers::ModInt;
use dashu::integer::UBig;
use num_traits::{One, Zero};

use crate::{Mass, Matter, MatterError};

impl<const P: u64> Matter for ModInt<P> {
    fn vacuum() -> Self {
        Self::zero()
    }

    fn unit() -> Self {
        Self::one()
    }

    fn mass(&self) -> Mass {
        UBig::from(self.value())
    }

    fn is_vacuum(&self) -> bool {
        self.is_zero()
    }

    fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), MatterError> {
        if divisor.is_zero() {
            return Err(MatterError::DivisionByVacuum);
        }
        let quotient = self
            .checked_div(*divisor)
            .ok_or_else(|| MatterError::NotInvertible(divisor.to_string()))?;
        Ok((quotient, Self::zero()))
    }

    fn negate(&self) -> Self {
        -*self
    }

    fn from_count(n: u64) -> Self {
        Self::new(n)
    }
}
