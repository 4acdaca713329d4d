// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Lossless conversions between `BigNumber` and `num_bigint`'s binary
//! big integers.

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::bignumber::BigNumber;
use crate::bignumber::Sign::{Minus, Plus};
use crate::TryFromBigNumberError;

fn magnitude_to_biguint(n: &BigNumber) -> BigUint {
    n.magnitude()
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, &d| acc * 10u32 + u32::from(d))
}

impl From<&BigNumber> for BigInt {
    fn from(n: &BigNumber) -> BigInt {
        let sign = match n.sign() {
            Minus => num_bigint::Sign::Minus,
            Plus => num_bigint::Sign::Plus,
        };
        BigInt::from_biguint(sign, magnitude_to_biguint(n))
    }
}

impl From<BigNumber> for BigInt {
    #[inline]
    fn from(n: BigNumber) -> BigInt {
        BigInt::from(&n)
    }
}

impl TryFrom<&BigNumber> for BigUint {
    type Error = TryFromBigNumberError<()>;

    fn try_from(n: &BigNumber) -> Result<BigUint, TryFromBigNumberError<()>> {
        match n.sign() {
            Minus => Err(TryFromBigNumberError::new(())),
            Plus => Ok(magnitude_to_biguint(n)),
        }
    }
}

impl TryFrom<BigNumber> for BigUint {
    type Error = TryFromBigNumberError<BigNumber>;

    #[inline]
    fn try_from(n: BigNumber) -> Result<BigUint, TryFromBigNumberError<BigNumber>> {
        BigUint::try_from(&n).map_err(|_| TryFromBigNumberError::new(n))
    }
}

impl From<&BigInt> for BigNumber {
    fn from(n: &BigInt) -> BigNumber {
        let (sign, digits) = n.to_radix_le(10);
        let sign = match sign {
            num_bigint::Sign::Minus => Minus,
            num_bigint::Sign::NoSign | num_bigint::Sign::Plus => Plus,
        };
        BigNumber::normalized(sign, digits)
    }
}

impl From<BigInt> for BigNumber {
    #[inline]
    fn from(n: BigInt) -> BigNumber {
        BigNumber::from(&n)
    }
}

impl From<&BigUint> for BigNumber {
    #[inline]
    fn from(n: &BigUint) -> BigNumber {
        BigNumber::normalized(Plus, n.to_radix_le(10))
    }
}

impl From<BigUint> for BigNumber {
    #[inline]
    fn from(n: BigUint) -> BigNumber {
        BigNumber::from(&n)
    }
}

#[cfg(test)]
mod tests {
    use crate::BigNumber;
    use alloc::string::ToString;
    use num_bigint::{BigInt, BigUint};

    #[test]
    fn test_bigint_round_trip() {
        for s in &["0", "7", "-7", "-1000000000000000000000000000001", "98765432109876543210"] {
            let n: BigNumber = s.parse().unwrap();
            let b = BigInt::from(&n);
            assert_eq!(b.to_string(), *s);
            assert_eq!(BigNumber::from(b), n);
        }
    }

    #[test]
    fn test_biguint() {
        let n: BigNumber = "123456789012345678901234567890".parse().unwrap();
        let u = BigUint::try_from(&n).unwrap();
        assert_eq!(u.to_string(), "123456789012345678901234567890");
        assert_eq!(BigNumber::from(u), n);

        let neg = -n;
        let err = BigUint::try_from(neg.clone()).unwrap_err();
        assert_eq!(err.into_original(), neg);
    }
}
