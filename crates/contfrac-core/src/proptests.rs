//! Property-based tests for the term generators and engines.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{euclid, fold, gcf_to_scf, ContinuedFraction, Operation, PullOrder};
    use contfrac_matter::{Integer, Matter, Tally};

    fn numerator() -> impl Strategy<Value = i64> {
        -300i64..300i64
    }

    fn denominator() -> impl Strategy<Value = i64> {
        1i64..300i64
    }

    fn op() -> impl Strategy<Value = Operation> {
        prop_oneof![
            Just(Operation::Add),
            Just(Operation::Sub),
            Just(Operation::Mul),
            Just(Operation::Div),
        ]
    }

    fn expand(p: i64, q: i64) -> Vec<Integer> {
        euclid(Integer::new(p), Integer::new(q))
            .map(Result::unwrap)
            .collect()
    }

    /// The exact result of `(p1/q1) op (p2/q2)` as an unreduced pair.
    fn exact(op: Operation, p1: i64, q1: i64, p2: i64, q2: i64) -> (i64, i64) {
        match op {
            Operation::Add => (p1 * q2 + p2 * q1, q1 * q2),
            Operation::Sub => (p1 * q2 - p2 * q1, q1 * q2),
            Operation::Mul => (p1 * p2, q1 * q2),
            Operation::Div => (p1 * q2, q1 * p2),
        }
    }

    fn run_with<M: Matter + From<i64> + 'static>(
        order: PullOrder,
        op: Operation,
        (p1, q1): (i64, i64),
        (p2, q2): (i64, i64),
    ) -> Vec<M> {
        let x = ContinuedFraction::from_ratio(M::from(p1), M::from(q1));
        let y = ContinuedFraction::from_ratio(M::from(p2), M::from(q2));
        ContinuedFraction::combine_with(x, y, op.state(), order)
            .map(Result::unwrap)
            .collect()
    }

    fn run<M: Matter + From<i64> + 'static>(
        op: Operation,
        p1: i64,
        q1: i64,
        p2: i64,
        q2: i64,
    ) -> Vec<M> {
        run_with(PullOrder::LeftFirst, op, (p1, q1), (p2, q2))
    }

    proptest! {
        #[test]
        fn euclid_fold_reconstructs(p in numerator(), q in denominator()) {
            let terms = expand(p, q);
            let (fp, fq) = fold(&terms).unwrap();
            prop_assert_eq!(fp * Integer::new(q), fq * Integer::new(p));
        }

        #[test]
        fn euclid_terminates_quickly(p in numerator(), q in denominator()) {
            // Truncated division at least halves the pair every two steps.
            prop_assert!(expand(p, q).len() <= 2 * 64);
        }

        #[test]
        fn engine_output_folds_to_exact_value(
            op in op(),
            p1 in -40i64..40, q1 in 1i64..40,
            p2 in -40i64..40, q2 in 1i64..40,
        ) {
            prop_assume!(op != Operation::Div || p2 != 0);
            let terms = run::<Integer>(op, p1, q1, p2, q2);
            let (n, d) = exact(op, p1, q1, p2, q2);
            let (fp, fq) = fold(&terms).unwrap();
            prop_assert_eq!(fp * Integer::new(d), fq * Integer::new(n));
        }

        #[test]
        fn ring_operations_match_euclid_for_non_negative_operands(
            op in prop_oneof![Just(Operation::Add), Just(Operation::Sub), Just(Operation::Mul)],
            p1 in 0i64..60, q1 in 1i64..60,
            p2 in 0i64..60, q2 in 1i64..60,
        ) {
            // Division may leave an uncompressed tail such as [0; 1].
            let (n, d) = exact(op, p1, q1, p2, q2);
            prop_assert_eq!(run::<Integer>(op, p1, q1, p2, q2), expand(n, d));
        }

        #[test]
        fn alternating_matches_euclid_for_non_negative_operands(
            op in op(),
            p1 in 0i64..60, q1 in 1i64..60,
            p2 in 0i64..60, q2 in 1i64..60,
        ) {
            prop_assume!(op != Operation::Div || p2 != 0);
            let (n, d) = exact(op, p1, q1, p2, q2);
            let terms = run_with::<Integer>(PullOrder::Alternating, op, (p1, q1), (p2, q2));
            prop_assert_eq!(terms, expand(n, d));
        }

        #[test]
        fn pull_orders_agree_on_value(
            op in op(),
            p1 in -40i64..40, q1 in 1i64..40,
            p2 in -40i64..40, q2 in 1i64..40,
        ) {
            prop_assume!(op != Operation::Div || p2 != 0);
            let left: Vec<Integer> = run_with(PullOrder::LeftFirst, op, (p1, q1), (p2, q2));
            let turns: Vec<Integer> = run_with(PullOrder::Alternating, op, (p1, q1), (p2, q2));
            let (lp, lq) = fold(&left).unwrap();
            let (tp, tq) = fold(&turns).unwrap();
            prop_assert_eq!(lp * tq, tp * lq);
        }

        #[test]
        fn backends_agree(
            op in op(),
            p1 in -40i64..40, q1 in 1i64..40,
            p2 in -40i64..40, q2 in 1i64..40,
        ) {
            prop_assume!(op != Operation::Div || p2 != 0);
            let big = run::<Integer>(op, p1, q1, p2, q2);
            let tally: Vec<Integer> = run::<Tally>(op, p1, q1, p2, q2)
                .into_iter()
                .map(Integer::from)
                .collect();
            prop_assert_eq!(big, tally);
        }

        #[test]
        fn finite_gcf_matches_its_value(terms in prop::collection::vec(1i64..20, 1..8)) {
            // b₀ + 1/(b₁ + 1/(…)) written as GCF pairs with unit numerators.
            let pairs: Vec<(Integer, Integer)> = terms
                .iter()
                .map(|&b| (Integer::unit(), Integer::new(b)))
                .collect();
            let scf: Vec<Integer> = gcf_to_scf(pairs).map(Result::unwrap).collect();

            let simple: Vec<Integer> = terms.iter().copied().map(Integer::new).collect();
            let (p, q) = fold(&simple).unwrap();
            let (sp, sq) = fold(&scf).unwrap();
            prop_assert_eq!(sp * q, sq * p);
        }
    }
}
