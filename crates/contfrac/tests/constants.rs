//! Transcendental constants through the public facade.

use contfrac::prelude::*;

fn prefix(cf: ContinuedFraction<Integer>, n: usize) -> Vec<i64> {
    cf.take(n)
        .map(|term| term.unwrap().to_i64().unwrap())
        .collect()
}

#[test]
fn pi_prefix() {
    assert_eq!(prefix(pi(), 9), vec![3, 7, 15, 1, 292, 1, 1, 1, 2]);
}

#[test]
fn e_prefix() {
    assert_eq!(prefix(exp(Integer::new(1)), 8), vec![2, 1, 2, 1, 1, 4, 1, 1]);
}

#[test]
fn ln_two_prefix() {
    assert_eq!(prefix(log(Integer::new(1)), 5), vec![0, 1, 2, 3, 1]);
}

#[test]
fn constants_compose() {
    // 1 + e = [3; 1, 2, 1, 1, 4, 1, 1, …]
    let one = ContinuedFraction::from_ratio(Integer::new(1), Integer::new(1));
    let sum = one + exp(Integer::new(1));
    assert_eq!(prefix(sum, 6), vec![3, 1, 2, 1, 1, 4]);
}
