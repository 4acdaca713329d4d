// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use core::cmp::Ordering::Less;
use core::mem;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign,
};

use num_integer::Integer;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedNeg, CheckedRem, CheckedSub, Zero};

use crate::algorithms::{self, add2, cmp_slice, mul3, sub2rev};
use crate::bignumber::BigNumber;
use crate::bignumber::Sign::{Minus, Plus};
use crate::DivisionByZeroError;

forward_all_binop_to_ref_ref!(impl Add for BigNumber, add);

impl<'a, 'b> Add<&'b BigNumber> for &'a BigNumber {
    type Output = BigNumber;

    fn add(self, other: &BigNumber) -> BigNumber {
        if other.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return other.clone();
        }

        match (self.sign(), other.sign()) {
            // same sign => keep the sign with the sum of magnitudes
            (Plus, Plus) | (Minus, Minus) => {
                BigNumber::normalized(self.sign(), add2(self.magnitude(), other.magnitude()))
            }
            // opposite signs => a + b == a - (-b)
            (Plus, Minus) | (Minus, Plus) => self - &(-other),
        }
    }
}

forward_all_binop_to_ref_ref!(impl Sub for BigNumber, sub);

impl<'a, 'b> Sub<&'b BigNumber> for &'a BigNumber {
    type Output = BigNumber;

    fn sub(self, other: &BigNumber) -> BigNumber {
        if other.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return -other;
        }

        match (self.sign(), other.sign()) {
            // same sign => subtract the smaller magnitude from the larger,
            // toggling the sign of the left when the operands swap
            (Plus, Plus) | (Minus, Minus) => {
                let (a, b) = (self.magnitude(), other.magnitude());
                if cmp_slice(a, b) == Less {
                    BigNumber::normalized(-self.sign(), sub2rev(b, a))
                } else {
                    BigNumber::normalized(self.sign(), sub2rev(a, b))
                }
            }
            // opposite signs => a - b == a + (-b)
            (Plus, Minus) | (Minus, Plus) => self + &(-other),
        }
    }
}

forward_all_binop_to_ref_ref!(impl Mul for BigNumber, mul);

impl<'a, 'b> Mul<&'b BigNumber> for &'a BigNumber {
    type Output = BigNumber;

    #[inline]
    fn mul(self, other: &BigNumber) -> BigNumber {
        BigNumber::normalized(
            self.sign() * other.sign(),
            mul3(self.magnitude(), other.magnitude()),
        )
    }
}

forward_all_binop_to_ref_ref!(impl Div for BigNumber, div);

impl<'a, 'b> Div<&'b BigNumber> for &'a BigNumber {
    type Output = BigNumber;

    #[inline]
    fn div(self, other: &BigNumber) -> BigNumber {
        let (q, _) = self.div_rem(other);
        q
    }
}

forward_all_binop_to_ref_ref!(impl Rem for BigNumber, rem);

impl<'a, 'b> Rem<&'b BigNumber> for &'a BigNumber {
    type Output = BigNumber;

    #[inline]
    fn rem(self, other: &BigNumber) -> BigNumber {
        let (_, r) = self.div_rem(other);
        r
    }
}

forward_op_assign_to_binop!(impl AddAssign for BigNumber, add_assign, Add::add);
forward_op_assign_to_binop!(impl SubAssign for BigNumber, sub_assign, Sub::sub);
forward_op_assign_to_binop!(impl MulAssign for BigNumber, mul_assign, Mul::mul);
forward_op_assign_to_binop!(impl DivAssign for BigNumber, div_assign, Div::div);
forward_op_assign_to_binop!(impl RemAssign for BigNumber, rem_assign, Rem::rem);

impl BigNumber {
    /// Truncating division returning both quotient and remainder, or
    /// `DivisionByZeroError` if `other` is zero.
    ///
    /// The quotient rounds toward zero and the remainder takes the sign of
    /// `self`, so `self == q * other + r` and `|r| < |other|`.
    ///
    /// ```
    /// use num_bignumber::{BigNumber, DivisionByZeroError};
    ///
    /// let (q, r) = BigNumber::from(-7).try_div_rem(&BigNumber::from(2)).unwrap();
    /// assert_eq!((q, r), (BigNumber::from(-3), BigNumber::from(-1)));
    ///
    /// let zero = BigNumber::from(0);
    /// assert_eq!(zero.try_div_rem(&zero), Err(DivisionByZeroError));
    /// ```
    pub fn try_div_rem(
        &self,
        other: &BigNumber,
    ) -> Result<(BigNumber, BigNumber), DivisionByZeroError> {
        if other.is_zero() {
            return Err(DivisionByZeroError);
        }

        let (q, r) = algorithms::div_rem(self.magnitude(), other.magnitude());
        Ok((
            BigNumber::normalized(self.sign() * other.sign(), q),
            BigNumber::normalized(self.sign(), r),
        ))
    }

    /// Truncating division, or `DivisionByZeroError` if `other` is zero.
    #[inline]
    pub fn try_div(&self, other: &BigNumber) -> Result<BigNumber, DivisionByZeroError> {
        self.try_div_rem(other).map(|(q, _)| q)
    }

    /// Remainder of truncating division, or `DivisionByZeroError` if `other`
    /// is zero.
    #[inline]
    pub fn try_rem(&self, other: &BigNumber) -> Result<BigNumber, DivisionByZeroError> {
        self.try_div_rem(other).map(|(_, r)| r)
    }
}

impl CheckedAdd for BigNumber {
    #[inline]
    fn checked_add(&self, v: &BigNumber) -> Option<BigNumber> {
        Some(self + v)
    }
}

impl CheckedSub for BigNumber {
    #[inline]
    fn checked_sub(&self, v: &BigNumber) -> Option<BigNumber> {
        Some(self - v)
    }
}

impl CheckedMul for BigNumber {
    #[inline]
    fn checked_mul(&self, v: &BigNumber) -> Option<BigNumber> {
        Some(self * v)
    }
}

impl CheckedDiv for BigNumber {
    #[inline]
    fn checked_div(&self, v: &BigNumber) -> Option<BigNumber> {
        self.try_div(v).ok()
    }
}

impl CheckedRem for BigNumber {
    #[inline]
    fn checked_rem(&self, v: &BigNumber) -> Option<BigNumber> {
        self.try_rem(v).ok()
    }
}

impl CheckedNeg for BigNumber {
    #[inline]
    fn checked_neg(&self) -> Option<BigNumber> {
        Some(-self)
    }
}

impl Integer for BigNumber {
    /// Truncating division and remainder.
    ///
    /// Panics if `other` is zero.
    #[inline]
    fn div_rem(&self, other: &BigNumber) -> (BigNumber, BigNumber) {
        match self.try_div_rem(other) {
            Ok(qr) => qr,
            Err(e) => panic!("{}", e),
        }
    }

    #[inline]
    fn div_floor(&self, other: &BigNumber) -> BigNumber {
        let (d, _) = self.div_mod_floor(other);
        d
    }

    #[inline]
    fn mod_floor(&self, other: &BigNumber) -> BigNumber {
        let (_, m) = self.div_mod_floor(other);
        m
    }

    fn div_mod_floor(&self, other: &BigNumber) -> (BigNumber, BigNumber) {
        // m.sign == other.sign
        let (d, m) = self.div_rem(other);
        if !m.is_zero() && m.sign() != other.sign() {
            (d.pred(), m + other)
        } else {
            (d, m)
        }
    }

    /// Calculates the Greatest Common Divisor (GCD) of the number and
    /// `other`. The result is always positive.
    fn gcd(&self, other: &BigNumber) -> BigNumber {
        let mut m = self.magnitude().to_vec();
        let mut n = other.magnitude().to_vec();
        while !algorithms::is_zero(&n) {
            let (_, r) = algorithms::div_rem(&m, &n);
            m = mem::replace(&mut n, r);
        }
        BigNumber::normalized(Plus, m)
    }

    /// Calculates the Lowest Common Multiple (LCM) of the number and `other`.
    fn lcm(&self, other: &BigNumber) -> BigNumber {
        if self.is_zero() || other.is_zero() {
            return Zero::zero();
        }
        let gcd = self.gcd(other);
        let (q, _) = algorithms::div_rem(self.magnitude(), gcd.magnitude());
        BigNumber::normalized(Plus, mul3(&q, other.magnitude()))
    }

    /// Deprecated, use `is_multiple_of` instead.
    #[inline]
    fn divides(&self, other: &BigNumber) -> bool {
        self.is_multiple_of(other)
    }

    /// Returns `true` if the number is a multiple of `other`.
    #[inline]
    fn is_multiple_of(&self, other: &BigNumber) -> bool {
        match self.try_rem(other) {
            Ok(r) => r.is_zero(),
            Err(DivisionByZeroError) => self.is_zero(),
        }
    }

    /// Returns `true` if the number is divisible by `2`.
    #[inline]
    fn is_even(&self) -> bool {
        self.magnitude()[0] % 2 == 0
    }

    /// Returns `true` if the number is not divisible by `2`.
    #[inline]
    fn is_odd(&self) -> bool {
        !self.is_even()
    }
}
