//! Property tests of the `BigNumber` algebra, checked against native `i128`
//! arithmetic for small operands and against `num_bigint::BigInt` for wide
//! ones.

use num_bignumber::{BigNumber, DivisionByZeroError, Sign};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use std::str::FromStr;

/// quickcheck's `Vec<u8>` doubles as a random magnitude once each byte is
/// folded into a decimal digit.
fn big((negative, digits): (bool, Vec<u8>)) -> BigNumber {
    let digits: Vec<u8> = digits.into_iter().map(|d| d % 10).collect();
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    BigNumber::from_digits_le(sign, &digits).unwrap()
}

fn reference(n: &BigNumber) -> BigInt {
    BigInt::from_str(&n.to_string()).unwrap()
}

type Raw = (bool, Vec<u8>);

#[quickcheck]
fn quickcheck_text_round_trip(a: Raw) -> bool {
    let a = big(a);
    let text = a.to_string();
    text.parse::<BigNumber>().unwrap() == a && text.parse::<BigNumber>().unwrap().to_string() == text
}

#[quickcheck]
fn quickcheck_canonical_form(a: Raw) -> bool {
    let a = big(a);
    let digits = a.magnitude();
    let trimmed = digits.len() == 1 || digits.last() != Some(&0);
    let zero_positive = !a.is_zero() || (a.sign() == Sign::Plus && digits == [0]);
    !digits.is_empty() && trimmed && zero_positive && digits.iter().all(|&d| d < 10)
}

#[quickcheck]
fn quickcheck_leading_zeros_and_fraction(a: Raw, zeros: u8, fraction: Vec<u8>) -> bool {
    let a = big(a);
    let text = a.to_string();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", &text[..]),
    };
    let fraction: String = fraction.iter().map(|d| char::from(b'0' + d % 10)).collect();
    let padded = format!(
        "{}{}{}.{}",
        sign,
        "0".repeat(usize::from(zeros % 8)),
        digits,
        fraction
    );
    padded.parse::<BigNumber>().unwrap() == a
}

#[quickcheck]
fn quickcheck_add_commutative(a: Raw, b: Raw) -> bool {
    let (a, b) = (big(a), big(b));
    &a + &b == &b + &a
}

#[quickcheck]
fn quickcheck_mul_commutative(a: Raw, b: Raw) -> bool {
    let (a, b) = (big(a), big(b));
    &a * &b == &b * &a
}

#[quickcheck]
fn quickcheck_additive_inverse(a: Raw) -> bool {
    let a = big(a);
    let sum = &a + &(-&a);
    sum.is_zero() && sum.to_string() == "0" && (&a - &a).is_zero()
}

#[quickcheck]
fn quickcheck_add_associative(a: Raw, b: Raw, c: Raw) -> bool {
    let (a, b, c) = (big(a), big(b), big(c));
    (&a + &b) + &c == &a + (&b + &c)
}

#[quickcheck]
fn quickcheck_mul_associative(a: Raw, b: Raw, c: Raw) -> bool {
    let (a, b, c) = (big(a), big(b), big(c));
    (&a * &b) * &c == &a * (&b * &c)
}

#[quickcheck]
fn quickcheck_distributive(a: Raw, b: Raw, c: Raw) -> bool {
    let (a, b, c) = (big(a), big(b), big(c));
    &a * (&b + &c) == &a * &b + &a * &c
}

#[quickcheck]
fn quickcheck_div_rem_identity(a: Raw, b: Raw) -> TestResult {
    let (a, b) = (big(a), big(b));
    if b.is_zero() {
        return TestResult::discard();
    }
    let (q, r) = a.div_rem(&b);
    let sign_ok = r.is_zero() || r.sign() == a.sign();
    TestResult::from_bool(&q * &b + &r == a && r.abs() < b.abs() && sign_ok)
}

#[quickcheck]
fn quickcheck_div_by_zero(a: Raw) -> bool {
    let a = big(a);
    let zero = BigNumber::zero();
    a.try_div(&zero) == Err(DivisionByZeroError) && a.try_rem(&zero) == Err(DivisionByZeroError)
}

#[quickcheck]
fn quickcheck_pow_base_cases(a: Raw) -> bool {
    let a = big((a.0, a.1.into_iter().take(20).collect()));
    a.pow(0) == BigNumber::one() && a.pow(1) == a && a.pow(2) == &a * &a
}

#[quickcheck]
fn quickcheck_pow_matches_reference(a: i16, exp: u8) -> bool {
    let exp = u32::from(exp % 40);
    let n = BigNumber::from(a).pow(exp);
    n.to_string() == num_traits::pow(BigInt::from(a), exp as usize).to_string()
}

#[quickcheck]
fn quickcheck_native_agrees(a: i64, b: i64) -> bool {
    let (x, y) = (i128::from(a), i128::from(b));
    let (a, b) = (BigNumber::from(a), BigNumber::from(b));

    let mut ok = (&a + &b).to_i128() == Some(x + y)
        && (&a - &b).to_i128() == Some(x - y)
        && (&a * &b).to_i128() == Some(x * y)
        && a.cmp(&b) == x.cmp(&y);
    if y != 0 {
        ok = ok && (&a / &b).to_i128() == Some(x / y) && (&a % &b).to_i128() == Some(x % y);
        ok = ok
            && a.div_floor(&b).to_i128() == Some(x.div_floor(&y))
            && a.mod_floor(&b).to_i128() == Some(x.mod_floor(&y));
    }
    ok
}

#[quickcheck]
fn quickcheck_gcd_lcm_agree(a: i32, b: i32) -> bool {
    let (x, y) = (i64::from(a), i64::from(b));
    let (a, b) = (BigNumber::from(a), BigNumber::from(b));
    a.gcd(&b).to_i64() == Some(x.gcd(&y)) && a.lcm(&b).to_i64() == Some(x.lcm(&y))
}

#[quickcheck]
fn quickcheck_reference_agrees(a: Raw, b: Raw) -> bool {
    let (a, b) = (big(a), big(b));
    let (x, y) = (reference(&a), reference(&b));

    let mut ok = reference(&(&a + &b)) == &x + &y
        && reference(&(&a - &b)) == &x - &y
        && reference(&(&a * &b)) == &x * &y
        && a.cmp(&b) == x.cmp(&y);
    if !b.is_zero() {
        // num-bigint's `/` and `%` truncate as well
        ok = ok && reference(&(&a / &b)) == &x / &y && reference(&(&a % &b)) == &x % &y;
    }
    ok
}

#[quickcheck]
fn quickcheck_wrapping_as_matches_cast(v: i128) -> bool {
    let n = BigNumber::from(v);
    n.wrapping_as::<i64>() == v as i64
        && n.wrapping_as::<u32>() == v as u32
        && n.wrapping_as::<i8>() == v as i8
        && n.wrapping_as::<u128>() == v as u128
}

#[quickcheck]
fn quickcheck_checked_narrowing(v: i128) -> bool {
    let n = BigNumber::from(v);
    n.to_i64() == i64::try_from(v).ok()
        && n.to_u64() == u64::try_from(v).ok()
        && i16::try_from(&n).ok() == i16::try_from(v).ok()
        && n.to_i128() == Some(v)
}

#[quickcheck]
fn quickcheck_inc_dec(a: Raw) -> bool {
    let a = big(a);
    let mut b = a.clone();
    b.inc();
    let after_inc = b == &a + BigNumber::one();
    b.dec();
    after_inc && b == a && a.succ().pred() == a
}

#[quickcheck]
fn quickcheck_negation_preserves_magnitude(a: Raw) -> bool {
    let a = big(a);
    let n = -&a;
    n.magnitude() == a.magnitude() && n.abs() == a.abs() && -n == a
}
