//! Dense univariate polynomials over a Matter domain.
//!
//! Besides ring arithmetic this provides the two transforms the
//! root-isolation generator is built from: [`Polynomial::shift`]
//! (`P(x) → P(x + k)`) and [`Polynomial::reverse`] (`P(x) → xⁿ·P(1/x)`).
//! Composed, they realize the Möbius substitution `x → 1/(x − k)`.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use crate::{Mass, Matter, MatterError};

/// A dense univariate polynomial.
///
/// Coefficients are stored in ascending degree order. Trailing vacuum
/// coefficients are trimmed, but at least one coefficient is always kept.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Polynomial<M> {
    coeffs: Vec<M>,
}

impl<M: Matter> Polynomial<M> {
    /// Creates a new polynomial from coefficients (lowest degree first).
    #[must_use]
    pub fn new(mut coeffs: Vec<M>) -> Self {
        while coeffs.len() > 1 && coeffs.last().is_some_and(Matter::is_vacuum) {
            coeffs.pop();
        }

        if coeffs.is_empty() {
            coeffs.push(M::vacuum());
        }

        Self { coeffs }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: M) -> Self {
        Self::new(vec![c])
    }

    /// Returns the degree of the polynomial.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns the number of stored coefficients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Always false: a polynomial keeps at least one coefficient.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns true for polynomials of degree zero.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.coeffs.len() <= 1
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> &M {
        &self.coeffs[self.coeffs.len() - 1]
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[M] {
        &self.coeffs
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn evaluate(&self, x: &M) -> M {
        let mut result = M::vacuum();
        for c in self.coeffs.iter().rev() {
            result = result * x.clone() + c.clone();
        }
        result
    }

    /// Taylor shift: returns `P(x + k)`.
    #[must_use]
    pub fn shift(&self, k: &M) -> Self {
        let mut coeffs = self.coeffs.clone();
        let n = coeffs.len() - 1;

        for i in 0..n {
            for j in (i..n).rev() {
                let carried = coeffs[j + 1].clone() * k.clone();
                coeffs[j] = coeffs[j].clone() + carried;
            }
        }

        Self::new(coeffs)
    }

    /// Reverses the coefficient order: returns `xⁿ·P(1/x)`.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self::new(self.coeffs.iter().rev().cloned().collect())
    }

    fn coeff_or_vacuum(&self, i: usize) -> M {
        self.coeffs.get(i).cloned().unwrap_or_else(M::vacuum)
    }
}

impl<M: Matter> Add for Polynomial<M> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let coeffs = (0..len)
            .map(|i| self.coeff_or_vacuum(i) + rhs.coeff_or_vacuum(i))
            .collect();
        Self::new(coeffs)
    }
}

impl<M: Matter> Sub for Polynomial<M> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let coeffs = (0..len)
            .map(|i| self.coeff_or_vacuum(i) - rhs.coeff_or_vacuum(i))
            .collect();
        Self::new(coeffs)
    }
}

impl<M: Matter> Mul for Polynomial<M> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.is_vacuum() || rhs.is_vacuum() {
            return Self::vacuum();
        }

        let n = self.coeffs.len();
        let m = rhs.coeffs.len();
        let mut result = vec![M::vacuum(); n + m - 1];

        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in rhs.coeffs.iter().enumerate() {
                result[i + j] = result[i + j].clone() + a.clone() * b.clone();
            }
        }

        Self::new(result)
    }
}

impl<M: Matter> Matter for Polynomial<M> {
    fn vacuum() -> Self {
        Self::constant(M::vacuum())
    }

    fn unit() -> Self {
        Self::constant(M::unit())
    }

    /// Sum of the coefficient masses.
    fn mass(&self) -> Mass {
        self.coeffs
            .iter()
            .fold(Mass::ZERO, |acc, c| acc + c.mass())
    }

    fn is_vacuum(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_vacuum()
    }

    /// Schoolbook long division.
    ///
    /// Each step divides the leading coefficients in the coefficient domain;
    /// the loop stops once that quotient is vacuum, so over the integers the
    /// remainder may keep the divisor's degree when leading coefficients do
    /// not divide.
    fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), MatterError> {
        if divisor.is_vacuum() {
            return Err(MatterError::DivisionByVacuum);
        }

        let mut remainder = self.coeffs.clone();
        let mut quotient = vec![M::vacuum(); self.coeffs.len()];
        let lead = divisor.leading_coeff();
        let deg_divisor = divisor.degree();

        while remainder.len() >= divisor.coeffs.len() {
            let Some(top) = remainder.last() else { break };
            let (factor, _) = top.div_rem(lead)?;
            if factor.is_vacuum() {
                break;
            }

            let shift = remainder.len() - 1 - deg_divisor;
            quotient[shift] = quotient[shift].clone() + factor.clone();
            for (i, c) in divisor.coeffs.iter().enumerate() {
                remainder[i + shift] = remainder[i + shift].clone() - c.clone() * factor.clone();
            }

            while remainder.last().is_some_and(Matter::is_vacuum) {
                remainder.pop();
            }
        }

        Ok((Self::new(quotient), Self::new(remainder)))
    }
}

impl<M: Matter + fmt::Display> fmt::Display for Polynomial<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_vacuum() && !(first && i == 0) {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            match i {
                0 => write!(f, "{c}")?,
                1 => write!(f, "{c}x")?,
                _ => write!(f, "{c}x^{i}")?,
            }
            first = false;
        }
        Ok(())
    }
}
