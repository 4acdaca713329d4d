// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Randomization of big numbers

use alloc::vec::Vec;

use rand::Rng;

use crate::bignumber::BigNumber;
use crate::bignumber::Sign::{Minus, Plus};

use num_traits::{Signed, Zero};

/// A trait for sampling random big numbers.
///
/// The `rand` feature must be enabled to use this. See crate-level
/// documentation for details.
pub trait RandBigNumber {
    /// Generate a random `BigNumber` of at most `digits` decimal digits,
    /// with a random sign.
    fn gen_bignumber(&mut self, digits: usize) -> BigNumber;

    /// Generate a random `BigNumber` less than the given bound. Fails
    /// when the bound is not positive.
    fn gen_bignumber_below(&mut self, bound: &BigNumber) -> BigNumber;

    /// Generate a random `BigNumber` within the given range. The lower
    /// bound is inclusive; the upper bound is exclusive. Fails when
    /// the upper bound is not greater than the lower bound.
    fn gen_bignumber_range(&mut self, lbound: &BigNumber, ubound: &BigNumber) -> BigNumber;
}

fn gen_magnitude<R: Rng + ?Sized>(rng: &mut R, digits: usize) -> Vec<u8> {
    (0..digits).map(|_| rng.gen_range(0..10u8)).collect()
}

impl<R: Rng + ?Sized> RandBigNumber for R {
    fn gen_bignumber(&mut self, digits: usize) -> BigNumber {
        loop {
            // Generate a random magnitude...
            let data = gen_magnitude(self, digits);
            // ...and then randomly assign it a sign...
            let negative = self.gen::<bool>();
            let n = BigNumber::normalized(if negative { Minus } else { Plus }, data);
            // ...but avoid returning zero twice as often as any other number.
            if negative && n.is_zero() {
                continue;
            }
            return n;
        }
    }

    fn gen_bignumber_below(&mut self, bound: &BigNumber) -> BigNumber {
        assert!(bound.is_positive());
        loop {
            let n = BigNumber::normalized(Plus, gen_magnitude(self, bound.digits()));
            if n < *bound {
                return n;
            }
        }
    }

    fn gen_bignumber_range(&mut self, lbound: &BigNumber, ubound: &BigNumber) -> BigNumber {
        assert!(*lbound < *ubound);
        lbound + self.gen_bignumber_below(&(ubound - lbound))
    }
}

#[cfg(test)]
mod tests {
    use super::RandBigNumber;
    use crate::BigNumber;
    use num_traits::Signed;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rand() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            let n = rng.gen_bignumber(137);
            assert!(n.digits() <= 137);
        }
        let zero = rng.gen_bignumber(0);
        assert_eq!(zero, BigNumber::from(0));
    }

    #[test]
    fn test_rand_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let l = BigNumber::from(-236);
        let u = BigNumber::from(91);
        for _ in 0..1000 {
            let n = rng.gen_bignumber_range(&l, &u);
            assert!(n >= l);
            assert!(n < u);
        }

        let bound: BigNumber = "1000000000000000000000000".parse().unwrap();
        for _ in 0..100 {
            let n = rng.gen_bignumber_below(&bound);
            assert!(!n.is_negative());
            assert!(n < bound);
        }
    }

    #[test]
    #[should_panic]
    fn test_rand_empty_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let n = BigNumber::from(5);
        rng.gen_bignumber_range(&n, &n);
    }
}
