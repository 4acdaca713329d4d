//! `BigNumber` plugged into the generic code of the other num crates.

use num_bignumber::BigNumber;

use num_bigint::BigInt;
use num_rational::Ratio;
use num_traits::{CheckedMul, One, Zero};

fn big(s: &str) -> BigNumber {
    s.parse().unwrap()
}

fn ratio(n: i64, d: i64) -> Ratio<BigNumber> {
    Ratio::new(BigNumber::from(n), BigNumber::from(d))
}

#[test]
fn test_ratio_reduces() {
    let r = ratio(6, -8);
    assert_eq!(r.numer(), &big("-3"));
    assert_eq!(r.denom(), &big("4"));

    let zero = ratio(0, 5);
    assert!(zero.numer().is_zero());
    assert!(zero.denom().is_one());
}

#[test]
fn test_ratio_arithmetic() {
    let sum = ratio(1, 3) + ratio(1, 6);
    assert_eq!((sum.numer(), sum.denom()), (&big("1"), &big("2")));

    let product = ratio(-2, 3) * ratio(9, 4);
    assert_eq!((product.numer(), product.denom()), (&big("-3"), &big("2")));

    let quotient = ratio(1, 7) / ratio(-1, 14);
    assert_eq!(quotient.to_integer(), big("-2"));

    // harmonic number H(30) = 9304682830147 / 2329089562800
    let mut h = Ratio::from_integer(BigNumber::zero());
    for k in 1..=30 {
        h = h + ratio(1, k);
    }
    assert_eq!(h.numer(), &big("9304682830147"));
    assert_eq!(h.denom(), &big("2329089562800"));
    assert_eq!(h.to_integer(), big("3"));
}

#[test]
fn test_range_sum() {
    let total: BigNumber = num_iter::range_inclusive(BigNumber::one(), BigNumber::from(100)).sum();
    assert_eq!(total, big("5050"));

    let start = big("99999999999999999999");
    let stop = big("100000000000000000004");
    let values: Vec<String> = num_iter::range(start, stop)
        .map(|n| n.to_string())
        .collect();
    assert_eq!(
        values,
        [
            "99999999999999999999",
            "100000000000000000000",
            "100000000000000000001",
            "100000000000000000002",
            "100000000000000000003",
        ]
    );
}

#[test]
fn test_range_step() {
    let evens: BigNumber =
        num_iter::range_step(BigNumber::from(-10), BigNumber::from(11), BigNumber::from(2))
            .map(|n| &n * &n)
            .sum();
    // 2 * (2^2 + 4^2 + 6^2 + 8^2 + 10^2) + 0
    assert_eq!(evens, big("440"));
}

#[test]
fn test_checked_generic() {
    fn checked_product<T: CheckedMul + One>(values: &[T]) -> Option<T> {
        values
            .iter()
            .try_fold(T::one(), |acc, v| acc.checked_mul(v))
    }

    assert_eq!(checked_product(&[200u8, 2]), None);
    let values = [BigNumber::from(200u8), BigNumber::from(2u8)];
    assert_eq!(checked_product(&values), Some(big("400")));
}

#[test]
fn test_reference_power() {
    let expected = num_traits::pow(BigInt::from(23), 50).to_string();
    assert_eq!(BigNumber::from(23).pow(50).to_string(), expected);
    assert_eq!(expected.len(), 69);
}
