// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A big signed integer stored as decimal digits.
//!
//! A `BigNumber` is a [`Sign`] paired with a magnitude of decimal digits,
//! least-significant digit first. Every operation returns a fresh value in
//! canonical form: no redundant leading zeros, and zero is always positive.
//!
//! Common numerical operations are overloaded, so we can treat them
//! the same way we treat other numbers. The arithmetic is the plain
//! grade-school kind, digit by digit.
//!
//! ## Example
//!
//! ```rust
//! use num_bignumber::BigNumber;
//! use num_traits::{One, Zero};
//!
//! // Calculate large fibonacci numbers.
//! fn fib(n: usize) -> BigNumber {
//!     let mut f0 = BigNumber::zero();
//!     let mut f1 = BigNumber::one();
//!     for _ in 0..n {
//!         let f2 = f0 + &f1;
//!         f0 = core::mem::replace(&mut f1, f2);
//!     }
//!     f0
//! }
//!
//! // This is a very large number.
//! assert_eq!(fib(100).to_string(), "354224848179261915075");
//! ```
//!
//! Text goes through [`FromStr`](core::str::FromStr); a fractional part is
//! accepted and truncated:
//!
//! ```rust
//! use num_bignumber::BigNumber;
//!
//! let a: BigNumber = "-7.99".parse().unwrap();
//! let b = BigNumber::from(2);
//! assert_eq!((&a / &b).to_string(), "-3");
//! assert_eq!((&a % &b).to_string(), "-1");
//! assert!(a.try_div(&BigNumber::default()).is_err());
//! ```
//!
//! ## Features
//!
//! The `std` crate feature is enabled by default, which adds
//! `std::error::Error` impls and [`BigNumber::read_from`]. Without it the
//! crate only needs `alloc`.
//!
//! The `rand` feature enables [`RandBigNumber`] for any `rand::Rng`, the
//! `quickcheck` feature implements `Arbitrary`, the `serde` feature
//! serializes values as decimal strings, and the `num-bigint` feature adds
//! conversions to and from `num_bigint::{BigInt, BigUint}`.

#![doc(html_root_url = "https://docs.rs/num-bignumber/0.1")]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

use core::fmt;

#[macro_use]
mod macros;

mod algorithms;
mod arithmetic;
mod bignumber;
mod convert;

#[cfg(feature = "rand")]
mod bigrand;

#[cfg(feature = "quickcheck")]
mod quickcheck_impls;

#[cfg(feature = "serde")]
mod serde_impls;

#[cfg(feature = "num-bigint")]
mod num_bigint_impls;

pub use crate::bignumber::{BigNumber, Sign};
pub use crate::convert::WrappingAs;

#[cfg(feature = "rand")]
pub use crate::bigrand::RandBigNumber;

/// The error returned when text does not match `['-'] digit+ ['.' digit*]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBigNumberError {
    kind: BigNumberErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum BigNumberErrorKind {
    Empty,
    InvalidDigit,
}

impl ParseBigNumberError {
    fn __description(&self) -> &str {
        use crate::BigNumberErrorKind::*;
        match self.kind {
            Empty => "cannot parse integer from empty string",
            InvalidDigit => "invalid digit found in string",
        }
    }

    fn empty() -> Self {
        ParseBigNumberError {
            kind: BigNumberErrorKind::Empty,
        }
    }

    fn invalid() -> Self {
        ParseBigNumberError {
            kind: BigNumberErrorKind::InvalidDigit,
        }
    }
}

impl fmt::Display for ParseBigNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.__description().fmt(f)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseBigNumberError {}

/// The error returned by the fallible division entry points when the
/// divisor is zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DivisionByZeroError;

impl fmt::Display for DivisionByZeroError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        "attempt to divide by zero".fmt(f)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DivisionByZeroError {}

/// The error type returned when a checked conversion from a `BigNumber`
/// to a native integer overflows the target type.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TryFromBigNumberError<T> {
    original: T,
}

impl<T> TryFromBigNumberError<T> {
    fn new(original: T) -> Self {
        TryFromBigNumberError { original }
    }

    fn __description(&self) -> &str {
        "out of range conversion regarding big number attempted"
    }

    /// Extract the original value, if available. The value will be
    /// available if the type before conversion was either `BigNumber` or
    /// `&BigNumber`, the latter giving `()`.
    pub fn into_original(self) -> T {
        self.original
    }
}

impl<T> fmt::Display for TryFromBigNumberError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.__description().fmt(f)
    }
}

#[cfg(feature = "std")]
impl<T> std::error::Error for TryFromBigNumberError<T> where T: fmt::Debug {}
