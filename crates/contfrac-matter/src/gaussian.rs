//! Gaussian integers Z[i].
//!
//! Division rounds the exact complex quotient to the nearest lattice point,
//! component by component, which keeps the remainder's norm below the
//! divisor's.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use dashu::integer::UBig;

use crate::{Mass, Matter, MatterError};

/// A lattice point `re + im·i` over an ordered integer backend.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Gaussian<M> {
    /// The real component.
    pub re: M,
    /// The imaginary component.
    pub im: M,
}

impl<M: Matter + PartialOrd> Gaussian<M> {
    /// Creates `re + im·i`.
    #[must_use]
    pub fn new(re: M, im: M) -> Self {
        Self { re, im }
    }

    /// Promotes a real value onto the lattice.
    #[must_use]
    pub fn real(re: M) -> Self {
        Self::new(re, M::vacuum())
    }

    /// The imaginary unit `i`.
    #[must_use]
    pub fn i() -> Self {
        Self::new(M::vacuum(), M::unit())
    }

    /// Returns the complex conjugate.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::new(self.re.clone(), self.im.negate())
    }

    /// The squared Euclidean norm `re² + im²`.
    #[must_use]
    pub fn norm_sq(&self) -> M {
        self.re.clone() * self.re.clone() + self.im.clone() * self.im.clone()
    }

    /// Rounds `n / d` to the nearest integer for a positive `d`.
    fn div_nearest(n: &M, d: &M) -> Result<M, MatterError> {
        let (q, r) = n.div_rem(d)?;
        if r.mass() * UBig::from(2u8) > d.mass() {
            // Step away from zero in the direction of the exact quotient.
            if *n < M::vacuum() {
                Ok(q - M::unit())
            } else {
                Ok(q + M::unit())
            }
        } else {
            Ok(q)
        }
    }
}

impl<M: Matter + PartialOrd> Add for Gaussian<M> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<M: Matter + PartialOrd> Sub for Gaussian<M> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl<M: Matter + PartialOrd> Mul for Gaussian<M> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let re = self.re.clone() * rhs.re.clone() - self.im.clone() * rhs.im.clone();
        let im = self.re * rhs.im + self.im * rhs.re;
        Self::new(re, im)
    }
}

impl<M: Matter + PartialOrd> Matter for Gaussian<M> {
    fn vacuum() -> Self {
        Self::new(M::vacuum(), M::vacuum())
    }

    fn unit() -> Self {
        Self::new(M::unit(), M::vacuum())
    }

    /// Manhattan magnitude `|re| + |im|`.
    fn mass(&self) -> Mass {
        self.re.mass() + self.im.mass()
    }

    fn is_vacuum(&self) -> bool {
        self.re.is_vacuum() && self.im.is_vacuum()
    }

    fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), MatterError> {
        let norm = divisor.norm_sq();
        if norm.is_vacuum() {
            return Err(MatterError::DivisionByVacuum);
        }

        // (a+bi)/(c+di) = (a+bi)(c-di) / (c²+d²)
        let numerator = self.clone() * divisor.conjugate();
        let quotient = Self::new(
            Self::div_nearest(&numerator.re, &norm)?,
            Self::div_nearest(&numerator.im, &norm)?,
        );
        let remainder = self.clone() - divisor.clone() * quotient.clone();
        Ok((quotient, remainder))
    }
}

impl<M: fmt::Display + Matter + PartialOrd> fmt::Display for Gaussian<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im < M::vacuum() {
            write!(f, "{}-{}i", self.re, self.im.negate())
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}
