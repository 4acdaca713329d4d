// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering::{self, Equal};
use core::fmt;
use core::iter::{Product, Sum};
use core::mem;
use core::ops::{Add, Mul, Neg};

use num_traits::{One, Pow, Signed, Zero};

use crate::algorithms::{self, cmp_slice};

use self::Sign::{Minus, Plus};

const DIGIT_CHARS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A `Sign` is a `BigNumber`'s composing element.
///
/// There is no sign for zero: zero is always `Plus`.
#[derive(PartialEq, PartialOrd, Eq, Ord, Copy, Clone, Debug, Hash)]
pub enum Sign {
    Minus,
    Plus,
}

impl Neg for Sign {
    type Output = Sign;

    /// Negate Sign value.
    #[inline]
    fn neg(self) -> Sign {
        match self {
            Minus => Plus,
            Plus => Minus,
        }
    }
}

impl Mul<Sign> for Sign {
    type Output = Sign;

    #[inline]
    fn mul(self, other: Sign) -> Sign {
        match (self, other) {
            (Plus, Plus) | (Minus, Minus) => Plus,
            (Plus, Minus) | (Minus, Plus) => Minus,
        }
    }
}

/// A big signed integer type.
///
/// `BigNumber { sign, data: vec![a, b, c] }` represents the number
/// `sign * (a + b * 10 + c * 10^2)`. The representation is canonical, so
/// equality and hashing are structural.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct BigNumber {
    sign: Sign,
    data: Vec<u8>,
}

impl BigNumber {
    /// Build a value from a raw magnitude, enforcing the canonical form:
    /// most-significant zeros are stripped and zero takes the `Plus` sign.
    ///
    /// Every constructor and operator goes through here.
    #[inline]
    pub(crate) fn normalized(sign: Sign, mut data: Vec<u8>) -> BigNumber {
        algorithms::trim(&mut data);
        let sign = if algorithms::is_zero(&data) { Plus } else { sign };
        BigNumber { sign, data }
    }

    /// Creates a value from decimal digits, least-significant first.
    ///
    /// Returns `None` if any digit is greater than 9. Leading zeros are
    /// dropped, and an empty or all-zero slice yields zero regardless of
    /// `sign`.
    ///
    /// # Examples
    ///
    /// ```
    /// use num_bignumber::{BigNumber, Sign};
    ///
    /// let n = BigNumber::from_digits_le(Sign::Minus, &[1, 2, 3, 0]).unwrap();
    /// assert_eq!(n.to_string(), "-321");
    /// assert!(BigNumber::from_digits_le(Sign::Plus, &[10]).is_none());
    /// ```
    pub fn from_digits_le(sign: Sign, digits: &[u8]) -> Option<BigNumber> {
        if digits.iter().any(|&d| d >= algorithms::RADIX) {
            return None;
        }
        Some(BigNumber::normalized(sign, digits.to_vec()))
    }

    /// Returns the sign of the `BigNumber`.
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns the decimal digits of the magnitude, least-significant first.
    #[inline]
    pub fn magnitude(&self) -> &[u8] {
        &self.data
    }

    /// Splits the value into its sign and its least-significant-first digits.
    #[inline]
    pub fn into_parts(self) -> (Sign, Vec<u8>) {
        (self.sign, self.data)
    }

    /// Returns the number of decimal digits, which is 1 for zero.
    #[inline]
    pub fn digits(&self) -> usize {
        self.data.len()
    }

    /// Raises `self` to the power `exp` by repeated multiplication.
    ///
    /// Any base to the power zero is one, including zero itself.
    ///
    /// ```
    /// use num_bignumber::BigNumber;
    ///
    /// assert_eq!(BigNumber::from(-3).pow(3), BigNumber::from(-27));
    /// assert_eq!(BigNumber::from(0).pow(0), BigNumber::from(1));
    /// ```
    pub fn pow(&self, exp: u32) -> BigNumber {
        let mut acc = BigNumber::one();
        for _ in 0..exp {
            acc = &acc * self;
        }
        acc
    }

    /// Returns `self + 1`.
    #[inline]
    pub fn succ(&self) -> BigNumber {
        self + BigNumber::one()
    }

    /// Returns `self - 1`.
    #[inline]
    pub fn pred(&self) -> BigNumber {
        self - BigNumber::one()
    }

    /// Pre-increment: rebinds `self` to `self + 1`.
    #[inline]
    pub fn inc(&mut self) -> &mut Self {
        *self = self.succ();
        self
    }

    /// Pre-decrement: rebinds `self` to `self - 1`.
    #[inline]
    pub fn dec(&mut self) -> &mut Self {
        *self = self.pred();
        self
    }

    /// Post-increment: rebinds `self` to `self + 1` and returns the old value.
    ///
    /// ```
    /// use num_bignumber::BigNumber;
    ///
    /// let mut n = BigNumber::from(9);
    /// assert_eq!(n.post_inc(), BigNumber::from(9));
    /// assert_eq!(n, BigNumber::from(10));
    /// ```
    #[inline]
    pub fn post_inc(&mut self) -> BigNumber {
        let next = self.succ();
        mem::replace(self, next)
    }

    /// Post-decrement: rebinds `self` to `self - 1` and returns the old value.
    #[inline]
    pub fn post_dec(&mut self) -> BigNumber {
        let prev = self.pred();
        mem::replace(self, prev)
    }

    /// Renders the magnitude in `radix` without the sign.
    pub(crate) fn magnitude_to_str_radix(&self, radix: u32) -> String {
        if radix == 10 {
            return self.data.iter().rev().map(|&d| (b'0' + d) as char).collect();
        }

        let divisor = BigNumber::from(radix);
        let mut rest = self.data.clone();
        let mut out = Vec::new();
        loop {
            let (q, r) = algorithms::div_rem(&rest, &divisor.data);
            let r = r.iter().rev().fold(0, |acc, &d| acc * 10 + usize::from(d));
            out.push(DIGIT_CHARS[r] as char);
            rest = q;
            if algorithms::is_zero(&rest) {
                break;
            }
        }
        out.iter().rev().collect()
    }
}

impl PartialOrd for BigNumber {
    #[inline]
    fn partial_cmp(&self, other: &BigNumber) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigNumber {
    #[inline]
    fn cmp(&self, other: &BigNumber) -> Ordering {
        let scmp = self.sign.cmp(&other.sign);
        if scmp != Equal {
            return scmp;
        }

        match self.sign {
            Plus => cmp_slice(&self.data, &other.data),
            Minus => cmp_slice(&other.data, &self.data),
        }
    }
}

impl Default for BigNumber {
    #[inline]
    fn default() -> BigNumber {
        Zero::zero()
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.magnitude_to_str_radix(10))
    }
}

impl Zero for BigNumber {
    #[inline]
    fn zero() -> BigNumber {
        BigNumber {
            sign: Plus,
            data: vec![0],
        }
    }

    #[inline]
    fn is_zero(&self) -> bool {
        algorithms::is_zero(&self.data)
    }
}

impl One for BigNumber {
    #[inline]
    fn one() -> BigNumber {
        BigNumber {
            sign: Plus,
            data: vec![1],
        }
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.sign == Plus && self.data == [1]
    }
}

impl Signed for BigNumber {
    #[inline]
    fn abs(&self) -> BigNumber {
        BigNumber {
            sign: Plus,
            data: self.data.clone(),
        }
    }

    #[inline]
    fn abs_sub(&self, other: &BigNumber) -> BigNumber {
        if *self <= *other {
            Zero::zero()
        } else {
            self - other
        }
    }

    #[inline]
    fn signum(&self) -> BigNumber {
        if self.is_zero() {
            Zero::zero()
        } else {
            BigNumber {
                sign: self.sign,
                data: vec![1],
            }
        }
    }

    #[inline]
    fn is_positive(&self) -> bool {
        self.sign == Plus && !self.is_zero()
    }

    #[inline]
    fn is_negative(&self) -> bool {
        self.sign == Minus
    }
}

impl Neg for BigNumber {
    type Output = BigNumber;

    #[inline]
    fn neg(mut self) -> BigNumber {
        if !self.is_zero() {
            self.sign = -self.sign;
        }
        self
    }
}

impl<'a> Neg for &'a BigNumber {
    type Output = BigNumber;

    #[inline]
    fn neg(self) -> BigNumber {
        -self.clone()
    }
}

impl Pow<u32> for BigNumber {
    type Output = BigNumber;

    #[inline]
    fn pow(self, exp: u32) -> BigNumber {
        BigNumber::pow(&self, exp)
    }
}

impl<'a> Pow<u32> for &'a BigNumber {
    type Output = BigNumber;

    #[inline]
    fn pow(self, exp: u32) -> BigNumber {
        BigNumber::pow(self, exp)
    }
}

impl<T> Sum<T> for BigNumber
where
    BigNumber: Add<T, Output = BigNumber>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Zero::zero(), |a, b| a + b)
    }
}

impl<T> Product<T> for BigNumber
where
    BigNumber: Mul<T, Output = BigNumber>,
{
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(One::one(), |a, b| a * b)
    }
}
