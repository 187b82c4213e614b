//! Property-based tests for the division contract across domains.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{FieldModulus, Galois, Gaussian, Integer, Matter, Polynomial, Tally};

    /// GF(49) = GF(7)[i] / (i² + 1)
    struct FortyNine;

    impl FieldModulus<7> for FortyNine {
        const COEFFS: &'static [u64] = &[1, 0, 1];
    }

    type Gf49 = Galois<7, FortyNine>;

    fn small_int() -> impl Strategy<Value = i64> {
        -200i64..200i64
    }

    fn gaussian(re: i64, im: i64) -> Gaussian<Integer> {
        Gaussian::new(Integer::new(re), Integer::new(im))
    }

    fn poly(coeffs: &[i64]) -> Polynomial<Integer> {
        Polynomial::new(coeffs.iter().copied().map(Integer::new).collect())
    }

    proptest! {
        #[test]
        fn integer_division_contract(a in small_int(), b in small_int()) {
            prop_assume!(b != 0);
            let a = Integer::new(a);
            let b = Integer::new(b);
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert!(r.mass() < b.mass());
            prop_assert_eq!(b * q + r, a);
        }

        #[test]
        fn tally_division_contract(a in small_int(), b in small_int()) {
            prop_assume!(b != 0);
            let a = Tally::new(a);
            let b = Tally::new(b);
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert!(r.mass() < b.mass());
            prop_assert_eq!(b * q + r, a);
        }

        #[test]
        fn gaussian_remainder_norm_shrinks(
            ar in small_int(), ai in small_int(),
            br in small_int(), bi in small_int()
        ) {
            prop_assume!(br != 0 || bi != 0);
            let a = gaussian(ar, ai);
            let b = gaussian(br, bi);
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert!(r.norm_sq() < b.norm_sq());
            prop_assert_eq!(b * q + r, a);
        }

        #[test]
        fn galois_division_is_exact(
            a in proptest::collection::vec(0u64..7, 0..4),
            b in proptest::collection::vec(0u64..7, 1..4)
        ) {
            let a = Gf49::new(&a);
            let b = Gf49::new(&b);
            prop_assume!(!b.is_vacuum());
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert!(r.is_vacuum());
            prop_assert_eq!(q * b, a);
        }

        #[test]
        fn polynomial_division_reconstructs(
            a in proptest::collection::vec(small_int(), 1..6),
            b in proptest::collection::vec(small_int(), 1..4)
        ) {
            let a = poly(&a);
            let b = poly(&b);
            prop_assume!(!b.is_vacuum());
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert_eq!(b * q + r, a);
        }

        #[test]
        fn shift_moves_the_evaluation_point(
            coeffs in proptest::collection::vec(small_int(), 1..5),
            k in 0i64..5,
            x in -5i64..5
        ) {
            let p = poly(&coeffs);
            let shifted = p.shift(&Integer::new(k));
            prop_assert_eq!(
                shifted.evaluate(&Integer::new(x)),
                p.evaluate(&Integer::new(x + k))
            );
        }
    }
}
