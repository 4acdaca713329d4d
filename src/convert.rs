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
use core::str::{self, FromStr};

use num_traits::float::FloatCore;
use num_traits::{FromPrimitive, Num, ToPrimitive, Zero};

use crate::algorithms::{add2, mul3};
use crate::bignumber::Sign::{self, Minus, Plus};
use crate::bignumber::BigNumber;
use crate::{ParseBigNumberError, TryFromBigNumberError};

impl FromStr for BigNumber {
    type Err = ParseBigNumberError;

    #[inline]
    fn from_str(s: &str) -> Result<BigNumber, ParseBigNumberError> {
        BigNumber::from_str_radix(s, 10)
    }
}

impl Num for BigNumber {
    type FromStrRadixErr = ParseBigNumberError;

    /// Creates and initializes a `BigNumber` from `['-'] digit+ ['.' digit*]`,
    /// where digits are taken in `radix`. The fractional part is validated
    /// and then discarded, without rounding.
    fn from_str_radix(s: &str, radix: u32) -> Result<BigNumber, ParseBigNumberError> {
        assert!(
            (2..=36).contains(&radix),
            "The radix must be within 2...36"
        );

        let (sign, unsigned) = match s.strip_prefix('-') {
            Some(tail) => (Minus, tail),
            None => (Plus, s),
        };
        let whole = match unsigned.find('.') {
            Some(dot) => {
                let fraction = &unsigned[dot + 1..];
                if !fraction.chars().all(|c| c.is_digit(radix)) {
                    return Err(ParseBigNumberError::invalid());
                }
                &unsigned[..dot]
            }
            None => unsigned,
        };
        if whole.is_empty() {
            return Err(ParseBigNumberError::empty());
        }

        let mut digits = whole
            .chars()
            .map(|c| c.to_digit(radix))
            .collect::<Option<Vec<u32>>>()
            .ok_or_else(ParseBigNumberError::invalid)?;

        let data = if radix == 10 {
            digits.reverse();
            digits.into_iter().map(|d| d as u8).collect()
        } else {
            let radix = BigNumber::from(radix);
            digits.into_iter().fold(vec![0], |acc, d| {
                add2(&mul3(&acc, radix.magnitude()), BigNumber::from(d).magnitude())
            })
        };
        Ok(BigNumber::normalized(sign, data))
    }
}

impl BigNumber {
    /// Creates and initializes a `BigNumber` from bytes in the given radix.
    ///
    /// The bytes follow the same grammar as [`Num::from_str_radix`]; `None`
    /// is returned for anything it rejects, including invalid UTF-8.
    #[inline]
    pub fn parse_bytes(buf: &[u8], radix: u32) -> Option<BigNumber> {
        let s = str::from_utf8(buf).ok()?;
        BigNumber::from_str_radix(s, radix).ok()
    }

    /// Returns the integer formatted as a string in the given radix.
    /// `radix` must be in the range `2...36`.
    ///
    /// ```
    /// use num_bignumber::BigNumber;
    ///
    /// let i = BigNumber::from(-255);
    /// assert_eq!(i.to_str_radix(16), "-ff");
    /// ```
    pub fn to_str_radix(&self, radix: u32) -> String {
        assert!(
            (2..=36).contains(&radix),
            "The radix must be within 2...36"
        );

        let mut s = String::new();
        if self.sign() == Minus {
            s.push('-');
        }
        s.push_str(&self.magnitude_to_str_radix(radix));
        s
    }

    /// Narrows the value into a native integer, wrapping around on overflow
    /// the way native integer arithmetic does.
    ///
    /// The digits are accumulated most-significant first as
    /// `value * 10 + digit` in `T`, then the sign is applied. Use
    /// [`ToPrimitive`] or `TryFrom` to detect overflow instead.
    ///
    /// ```
    /// use num_bignumber::BigNumber;
    ///
    /// let n: BigNumber = "300".parse().unwrap();
    /// assert_eq!(n.wrapping_as::<u8>(), 44);
    /// assert_eq!(n.wrapping_as::<i64>(), 300);
    /// assert_eq!((-n).wrapping_as::<i16>(), -300);
    /// ```
    #[inline]
    pub fn wrapping_as<T: WrappingAs>(&self) -> T {
        T::wrapping_from_digits(self.sign(), self.magnitude())
    }

    /// Reads the next whitespace-delimited token from `reader` and parses
    /// it.
    ///
    /// Returns `Ok(None)` once the input holds no further token. A token
    /// that is not a valid number yields an error of kind `InvalidData`
    /// wrapping a [`ParseBigNumberError`]. The whitespace ending the token
    /// is left unread.
    ///
    /// ```
    /// use num_bignumber::BigNumber;
    ///
    /// let mut input = "  12 -3.5\n".as_bytes();
    /// let a = BigNumber::read_from(&mut input).unwrap();
    /// let b = BigNumber::read_from(&mut input).unwrap();
    /// assert_eq!(a, Some(BigNumber::from(12)));
    /// assert_eq!(b, Some(BigNumber::from(-3)));
    /// assert_eq!(BigNumber::read_from(&mut input).unwrap(), None);
    /// ```
    #[cfg(feature = "std")]
    pub fn read_from<R>(reader: &mut R) -> std::io::Result<Option<BigNumber>>
    where
        R: std::io::BufRead + ?Sized,
    {
        use std::io::{Error, ErrorKind};

        let mut token = Vec::new();
        loop {
            let buf = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if buf.is_empty() {
                break;
            }

            let mut used = 0;
            let mut complete = false;
            for &b in buf {
                if b.is_ascii_whitespace() {
                    if !token.is_empty() {
                        complete = true;
                        break;
                    }
                } else {
                    token.push(b);
                }
                used += 1;
            }
            reader.consume(used);
            if complete {
                break;
            }
        }

        if token.is_empty() {
            return Ok(None);
        }
        let text = str::from_utf8(&token)
            .map_err(|_| Error::new(ErrorKind::InvalidData, ParseBigNumberError::invalid()))?;
        text.parse::<BigNumber>()
            .map(Some)
            .map_err(|e| Error::new(ErrorKind::InvalidData, e))
    }

    fn from_unsigned(sign: Sign, mut n: u128) -> BigNumber {
        let mut data = Vec::new();
        loop {
            data.push((n % 10) as u8);
            n /= 10;
            if n == 0 {
                break;
            }
        }
        BigNumber::normalized(sign, data)
    }
}

macro_rules! impl_from_unsigned {
    ($($T:ty),*) => {$(
        impl From<$T> for BigNumber {
            #[inline]
            fn from(n: $T) -> Self {
                BigNumber::from_unsigned(Plus, n as u128)
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($T:ty),*) => {$(
        impl From<$T> for BigNumber {
            #[inline]
            fn from(n: $T) -> Self {
                let sign = if n < 0 { Minus } else { Plus };
                BigNumber::from_unsigned(sign, (n as i128).unsigned_abs())
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);

impl FromPrimitive for BigNumber {
    #[inline]
    fn from_i64(n: i64) -> Option<BigNumber> {
        Some(BigNumber::from(n))
    }

    #[inline]
    fn from_i128(n: i128) -> Option<BigNumber> {
        Some(BigNumber::from(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<BigNumber> {
        Some(BigNumber::from(n))
    }

    #[inline]
    fn from_u128(n: u128) -> Option<BigNumber> {
        Some(BigNumber::from(n))
    }

    /// Converts exactly, truncating any fraction toward zero; `None` for
    /// NaN and infinities.
    fn from_f64(n: f64) -> Option<BigNumber> {
        if !n.is_finite() {
            return None;
        }

        // n = sign * mantissa * 2^exponent
        let (mantissa, exponent, sign) = FloatCore::integer_decode(n);
        let magnitude = if exponent >= 0 {
            BigNumber::from(mantissa) * BigNumber::from(2).pow(exponent as u32)
        } else if exponent > -64 {
            BigNumber::from(mantissa >> (-exponent) as u32)
        } else {
            return Some(BigNumber::zero());
        };
        let sign = if sign < 0 { Minus } else { Plus };
        Some(BigNumber::normalized(sign, magnitude.into_parts().1))
    }
}

macro_rules! checked_to_primitive {
    ($name:ident, $T:ty) => {
        #[inline]
        fn $name(&self) -> Option<$T> {
            let mut n: $T = 0;
            for &d in self.magnitude().iter().rev() {
                n = n.checked_mul(10)?;
                n = match self.sign() {
                    Plus => n.checked_add(<$T>::from(d))?,
                    Minus => n.checked_sub(<$T>::from(d))?,
                };
            }
            Some(n)
        }
    };
}

impl ToPrimitive for BigNumber {
    checked_to_primitive!(to_i64, i64);
    checked_to_primitive!(to_i128, i128);
    checked_to_primitive!(to_u64, u64);
    checked_to_primitive!(to_u128, u128);

    /// Accumulates the digits as a float; values beyond `f64::MAX` become
    /// infinite rather than `None`.
    #[inline]
    fn to_f64(&self) -> Option<f64> {
        let n = self
            .magnitude()
            .iter()
            .rev()
            .fold(0.0, |acc, &d| acc * 10.0 + f64::from(d));
        Some(if self.sign() == Minus { -n } else { n })
    }
}

macro_rules! impl_try_from_bignumber {
    ($T:ty, $to_ty:path) => {
        impl TryFrom<&BigNumber> for $T {
            type Error = TryFromBigNumberError<()>;

            #[inline]
            fn try_from(value: &BigNumber) -> Result<$T, TryFromBigNumberError<()>> {
                $to_ty(value).ok_or(TryFromBigNumberError::new(()))
            }
        }

        impl TryFrom<BigNumber> for $T {
            type Error = TryFromBigNumberError<BigNumber>;

            #[inline]
            fn try_from(value: BigNumber) -> Result<$T, TryFromBigNumberError<BigNumber>> {
                <$T>::try_from(&value).map_err(|_| TryFromBigNumberError::new(value))
            }
        }
    };
}

impl_try_from_bignumber!(u8, ToPrimitive::to_u8);
impl_try_from_bignumber!(u16, ToPrimitive::to_u16);
impl_try_from_bignumber!(u32, ToPrimitive::to_u32);
impl_try_from_bignumber!(u64, ToPrimitive::to_u64);
impl_try_from_bignumber!(usize, ToPrimitive::to_usize);
impl_try_from_bignumber!(u128, ToPrimitive::to_u128);

impl_try_from_bignumber!(i8, ToPrimitive::to_i8);
impl_try_from_bignumber!(i16, ToPrimitive::to_i16);
impl_try_from_bignumber!(i32, ToPrimitive::to_i32);
impl_try_from_bignumber!(i64, ToPrimitive::to_i64);
impl_try_from_bignumber!(isize, ToPrimitive::to_isize);
impl_try_from_bignumber!(i128, ToPrimitive::to_i128);

mod private {
    pub trait Sealed {}
}

/// Native integer widths a `BigNumber` can be narrowed into with
/// [`BigNumber::wrapping_as`].
///
/// This trait is sealed: it is implemented for `i8` through `i128`, `u8`
/// through `u128`, `isize` and `usize`, and cannot be implemented outside
/// this crate.
pub trait WrappingAs: private::Sealed + Copy {
    #[doc(hidden)]
    fn wrapping_from_digits(sign: Sign, digits_le: &[u8]) -> Self;
}

macro_rules! impl_wrapping_as {
    ($($T:ty),*) => {$(
        impl private::Sealed for $T {}

        impl WrappingAs for $T {
            #[inline]
            fn wrapping_from_digits(sign: Sign, digits_le: &[u8]) -> Self {
                let n = digits_le
                    .iter()
                    .rev()
                    .fold(0 as $T, |acc, &d| acc.wrapping_mul(10).wrapping_add(d as $T));
                match sign {
                    Plus => n,
                    Minus => n.wrapping_neg(),
                }
            }
        }
    )*};
}

impl_wrapping_as!(u8, u16, u32, u64, u128, usize);
impl_wrapping_as!(i8, i16, i32, i64, i128, isize);
