//! Property-based tests for the integer backends.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{Integer, ModInt, Tally};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        // Both backends must describe the same ring.

        #[test]
        fn backends_agree_on_add(a in small_int(), b in small_int()) {
            let sum = Tally::new(a) + Tally::new(b);
            prop_assert_eq!(Integer::from(sum), Integer::new(a) + Integer::new(b));
        }

        #[test]
        fn backends_agree_on_sub(a in small_int(), b in small_int()) {
            let diff = Tally::new(a) - Tally::new(b);
            prop_assert_eq!(Integer::from(diff), Integer::new(a) - Integer::new(b));
        }

        #[test]
        fn backends_agree_on_mul(a in small_int(), b in small_int()) {
            let product = Tally::new(a) * Tally::new(b);
            prop_assert_eq!(Integer::from(product), Integer::new(a) * Integer::new(b));
        }

        #[test]
        fn backends_agree_on_division(a in small_int(), b in non_zero_int()) {
            let (tq, tr) = Tally::new(a).checked_div_rem(&Tally::new(b)).unwrap();
            let (iq, ir) = Integer::new(a).checked_div_rem(&Integer::new(b)).unwrap();
            prop_assert_eq!(Integer::from(tq), iq);
            prop_assert_eq!(Integer::from(tr), ir);
        }

        #[test]
        fn backends_agree_on_order(a in small_int(), b in small_int()) {
            prop_assert_eq!(Tally::new(a).cmp(&Tally::new(b)), a.cmp(&b));
        }

        #[test]
        fn division_reconstructs_dividend(a in small_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let (q, r) = a.checked_div_rem(&b).unwrap();
            prop_assert!(r.magnitude() < b.magnitude());
            prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());
            prop_assert_eq!(&b * &q + r, a);
        }

        #[test]
        fn tally_round_trips_through_integer(a in small_int()) {
            prop_assert_eq!(Tally::from(Integer::new(a)), Tally::new(a));
        }

        #[test]
        fn modint_inverse(a in 1u64..1000u64) {
            const P: u64 = 998_244_353;
            let a = ModInt::<P>::new(a);
            let inv = a.inv().expect("inverse should exist for non-zero mod prime");
            prop_assert_eq!((a * inv).value(), 1);
        }

        #[test]
        fn modint_division_is_exact(a in 0u64..1000u64, b in 1u64..1000u64) {
            const P: u64 = 998_244_353;
            let a = ModInt::<P>::new(a);
            let b = ModInt::<P>::new(b);
            let q = a.checked_div(b).unwrap();
            prop_assert_eq!(q * b, a);
        }
    }
}
