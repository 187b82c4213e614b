//! Extension fields GF(pⁿ) as Matter.
//!
//! An element is a polynomial over `ModInt<P>` of degree below `n`, kept
//! reduced by a modulus of degree `n`. The modulus is named at the type
//! level by a [`FieldModulus`] marker, so `vacuum()` and `unit()` need no
//! field handle.
//!
//! As in any field, division is exact and a Euclid expansion stops after a
//! single term.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, Mul, Sub};

use contfrac_integers::ModInt;

use crate::{Mass, Matter, MatterError, Polynomial};

/// Names the irreducible polynomial that defines an extension of `ModInt<P>`.
///
/// # Example
///
/// ```
/// use contfrac_matter::{FieldModulus, Galois};
///
/// // GF(4) = GF(2)[α] / (α² + α + 1)
/// struct Four;
///
/// impl FieldModulus<2> for Four {
///     const COEFFS: &'static [u64] = &[1, 1, 1];
/// }
///
/// let alpha = Galois::<2, Four>::new(&[0, 1]);
/// assert_eq!(alpha.clone() * alpha.clone(), alpha + Galois::new(&[1]));
/// ```
pub trait FieldModulus<const P: u64>: 'static {
    /// Coefficients of the modulus, lowest degree first.
    const COEFFS: &'static [u64];

    /// The modulus as a polynomial over the prime field.
    #[must_use]
    fn modulus() -> Polynomial<ModInt<P>> {
        Polynomial::new(Self::COEFFS.iter().map(|&c| ModInt::new(c)).collect())
    }

    /// The extension degree `n`.
    #[must_use]
    fn degree() -> usize {
        Self::modulus().degree()
    }

    /// The number of elements `pⁿ`, saturating at `u128::MAX`.
    #[must_use]
    fn order() -> u128 {
        let n = u32::try_from(Self::degree()).unwrap_or(u32::MAX);
        u128::from(P).saturating_pow(n)
    }
}

/// An element of the field `GF(P)[x] / Q`.
pub struct Galois<const P: u64, Q> {
    poly: Polynomial<ModInt<P>>,
    field: PhantomData<fn() -> Q>,
}

impl<const P: u64, Q: FieldModulus<P>> Galois<P, Q> {
    /// Creates an element from coefficients, lowest degree first.
    #[must_use]
    pub fn new(coeffs: &[u64]) -> Self {
        Self::from_poly(Polynomial::new(
            coeffs.iter().map(|&c| ModInt::new(c)).collect(),
        ))
    }

    /// Reduces a polynomial into the field.
    #[must_use]
    pub fn from_poly(poly: Polynomial<ModInt<P>>) -> Self {
        let poly = match poly.div_rem(&Q::modulus()) {
            Ok((_, remainder)) => remainder,
            Err(_) => poly,
        };
        Self {
            poly,
            field: PhantomData,
        }
    }

    /// Coefficients of the reduced representative, lowest degree first.
    #[must_use]
    pub fn coeffs(&self) -> &[ModInt<P>] {
        self.poly.coeffs()
    }

    /// The reduced representative.
    #[must_use]
    pub fn as_poly(&self) -> &Polynomial<ModInt<P>> {
        &self.poly
    }

    /// Computes `self^exp` by square-and-multiply.
    #[must_use]
    pub fn pow(&self, mut exp: u128) -> Self {
        let mut base = self.clone();
        let mut result = Self::unit();

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }

    /// The multiplicative inverse `self^(pⁿ − 2)`.
    ///
    /// Returns `None` for zero, and for elements that are zero divisors
    /// because the modulus is not irreducible.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        if self.is_vacuum() {
            return None;
        }
        let candidate = self.pow(Q::order().saturating_sub(2));
        (candidate.clone() * self.clone() == Self::unit()).then_some(candidate)
    }

    /// The Frobenius orbit `a, aᵖ, a^(p²), …`.
    pub fn frobenius(&self) -> impl Iterator<Item = Self> {
        std::iter::successors(Some(self.clone()), |a| Some(a.pow(u128::from(P))))
    }

    /// The absolute trace: the sum of the first `n` Frobenius conjugates.
    ///
    /// The result always lies in the prime field.
    #[must_use]
    pub fn trace(&self) -> Self {
        self.frobenius()
            .take(Q::degree())
            .fold(Self::vacuum(), |acc, conjugate| acc + conjugate)
    }

    /// Every element of the field, counting coefficient vectors in base `p`
    /// with the constant term as the lowest digit.
    pub fn elements() -> impl Iterator<Item = Self> {
        let n = Q::degree();
        let p = u128::from(P);
        (0..Q::order()).map(move |mut index| {
            let coeffs: Vec<u64> = (0..n)
                .map(|_| {
                    let digit = index % p;
                    index /= p;
                    u64::try_from(digit).unwrap_or_default()
                })
                .collect();
            Self::new(&coeffs)
        })
    }
}

impl<const P: u64, Q> Clone for Galois<P, Q> {
    fn clone(&self) -> Self {
        Self {
            poly: self.poly.clone(),
            field: PhantomData,
        }
    }
}

impl<const P: u64, Q> PartialEq for Galois<P, Q> {
    fn eq(&self, other: &Self) -> bool {
        self.poly == other.poly
    }
}

impl<const P: u64, Q> Eq for Galois<P, Q> {}

impl<const P: u64, Q> Hash for Galois<P, Q> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.poly.hash(state);
    }
}

impl<const P: u64, Q> fmt::Debug for Galois<P, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<u64> = self.poly.coeffs().iter().map(|c| c.value()).collect();
        write!(f, "GF{values:?}")
    }
}

impl<const P: u64, Q: FieldModulus<P>> fmt::Display for Galois<P, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.poly)
    }
}

impl<const P: u64, Q: FieldModulus<P>> Add for Galois<P, Q> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_poly(self.poly + rhs.poly)
    }
}

impl<const P: u64, Q: FieldModulus<P>> Sub for Galois<P, Q> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_poly(self.poly - rhs.poly)
    }
}

impl<const P: u64, Q: FieldModulus<P>> Mul for Galois<P, Q> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::from_poly(self.poly * rhs.poly)
    }
}

impl<const P: u64, Q: FieldModulus<P>> From<ModInt<P>> for Galois<P, Q> {
    fn from(value: ModInt<P>) -> Self {
        Self::from_poly(Polynomial::constant(value))
    }
}

impl<const P: u64, Q: FieldModulus<P>> Matter for Galois<P, Q> {
    fn vacuum() -> Self {
        Self::from_poly(Polynomial::vacuum())
    }

    fn unit() -> Self {
        Self::from_poly(Polynomial::unit())
    }

    /// Sum of the coefficient residues.
    fn mass(&self) -> Mass {
        self.poly.mass()
    }

    fn is_vacuum(&self) -> bool {
        self.poly.is_vacuum()
    }

    fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), MatterError> {
        if divisor.is_vacuum() {
            return Err(MatterError::DivisionByVacuum);
        }
        let inverse = divisor
            .inverse()
            .ok_or_else(|| MatterError::NotInvertible(divisor.to_string()))?;
        Ok((self.clone() * inverse, Self::vacuum()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// GF(4) = GF(2)[α] / (α² + α + 1)
    struct Four;

    impl FieldModulus<2> for Four {
        const COEFFS: &'static [u64] = &[1, 1, 1];
    }

    /// GF(9) = GF(3)[i] / (i² + 1)
    struct Nine;

    impl FieldModulus<3> for Nine {
        const COEFFS: &'static [u64] = &[1, 0, 1];
    }

    /// x² + 1 = (x + 1)² over GF(2): not a field.
    struct Split;

    impl FieldModulus<2> for Split {
        const COEFFS: &'static [u64] = &[1, 0, 1];
    }

    type Gf4 = Galois<2, Four>;
    type Gf9 = Galois<3, Nine>;

    #[test]
    fn test_reduction() {
        // α² = α + 1
        assert_eq!(Gf4::new(&[0, 0, 1]), Gf4::new(&[1, 1]));
        // Coefficients reduce mod p.
        assert_eq!(Gf9::new(&[4, 5]), Gf9::new(&[1, 2]));
        // i² = -1 = 2
        assert_eq!(Gf9::new(&[0, 1]) * Gf9::new(&[0, 1]), Gf9::new(&[2]));
    }

    #[test]
    fn test_order_and_elements() {
        assert_eq!(Four::degree(), 2);
        assert_eq!(Four::order(), 4);
        assert_eq!(Nine::order(), 9);

        let all: Vec<Gf9> = Gf9::elements().collect();
        assert_eq!(all.len(), 9);
        assert_eq!(all[0], Gf9::vacuum());
        assert_eq!(all[1], Gf9::unit());
        assert_eq!(all[3], Gf9::new(&[0, 1]));
    }

    #[test]
    fn test_inverse() {
        for a in Gf9::elements().skip(1) {
            let inv = a.inverse().unwrap();
            assert_eq!(a * inv, Gf9::unit());
        }
        assert!(Gf9::vacuum().inverse().is_none());
    }

    #[test]
    fn test_division_is_exact() {
        for a in Gf9::elements() {
            for b in Gf9::elements().skip(1) {
                let (q, r) = a.div_rem(&b).unwrap();
                assert!(r.is_vacuum());
                assert_eq!(q * b, a);
            }
        }
        assert_eq!(
            Gf4::unit().div_rem(&Gf4::vacuum()),
            Err(MatterError::DivisionByVacuum)
        );
    }

    #[test]
    fn test_zero_divisor_is_not_invertible() {
        let x_plus_one = Galois::<2, Split>::new(&[1, 1]);
        assert!(x_plus_one.inverse().is_none());
        assert!(matches!(
            Galois::<2, Split>::unit().div_rem(&x_plus_one),
            Err(MatterError::NotInvertible(_))
        ));
    }

    #[test]
    fn test_frobenius_orbit_closes() {
        let alpha = Gf4::new(&[0, 1]);
        let orbit: Vec<Gf4> = alpha.frobenius().take(3).collect();
        assert_eq!(orbit, vec![alpha.clone(), Gf4::new(&[1, 1]), alpha]);
    }

    #[test]
    fn test_trace_lands_in_prime_field() {
        // α + α² = α + α + 1 = 1
        assert_eq!(Gf4::new(&[0, 1]).trace(), Gf4::unit());
        for a in Gf9::elements() {
            assert_eq!(a.trace().coeffs().len(), 1);
        }
    }

    #[test]
    fn test_pow_and_negation() {
        let i = Gf9::new(&[0, 1]);
        assert_eq!(i.pow(4), Gf9::unit());
        assert_eq!(i.pow(0), Gf9::unit());
        assert_eq!(i.negate(), Gf9::new(&[0, 2]));
        assert_eq!(Gf9::from(ModInt::new(5)), Gf9::new(&[2]));
    }

    #[test]
    fn test_display() {
        assert_eq!(Gf4::new(&[1, 1]).to_string(), "1x + 1");
        assert_eq!(format!("{:?}", Gf9::new(&[1, 2])), "GF[1, 2]");
    }
}
