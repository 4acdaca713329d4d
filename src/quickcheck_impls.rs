// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

use quickcheck::{empty_shrinker, Arbitrary, Gen};

use crate::bignumber::BigNumber;
use crate::bignumber::Sign::{Minus, Plus};

use num_traits::{Signed, Zero};

impl Arbitrary for BigNumber {
    fn arbitrary(g: &mut Gen) -> Self {
        let sign = if bool::arbitrary(g) { Plus } else { Minus };
        let digits: Vec<u8> = Vec::<u8>::arbitrary(g)
            .into_iter()
            .map(|d| d % 10)
            .collect();
        BigNumber::normalized(sign, digits)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        /// Based on the SignedShrinker for primitive types in quickcheck
        /// itself.
        struct Iter(BigNumber, BigNumber);
        impl Iterator for Iter {
            type Item = BigNumber;

            fn next(&mut self) -> Option<BigNumber> {
                let candidate = &self.0 - &self.1;
                if candidate.abs() < self.0.abs() {
                    self.1 = &self.1 / BigNumber::from(2);
                    Some(candidate)
                } else {
                    None
                }
            }
        }

        if self.is_zero() {
            empty_shrinker()
        } else {
            let shrinker = Iter(self.clone(), self / BigNumber::from(2));
            let mut items = vec![BigNumber::zero()];
            if self.is_negative() {
                items.push(self.abs());
            }
            Box::new(items.into_iter().chain(shrinker))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::BigNumber;
    use alloc::string::ToString;
    use alloc::vec::Vec;
    use quickcheck::{Arbitrary, Gen};

    #[test]
    fn test_arbitrary_is_canonical() {
        let mut g = Gen::new(40);
        for _ in 0..200 {
            let n = BigNumber::arbitrary(&mut g);
            let text = n.to_string();
            assert_eq!(text.parse::<BigNumber>().unwrap(), n);
            assert_ne!(text, "-0");
        }
    }

    #[test]
    fn test_shrink_moves_toward_zero() {
        let n: BigNumber = "-98765".parse().unwrap();
        let shrunk: Vec<BigNumber> = n.shrink().collect();
        assert_eq!(shrunk[0], BigNumber::from(0));
        assert_eq!(shrunk[1], BigNumber::from(98765));
        for s in &shrunk[2..] {
            assert!(s > &n && s < &BigNumber::from(0));
        }
    }
}
