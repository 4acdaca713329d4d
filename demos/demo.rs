// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Prints a few results computed with `BigNumber`.
//!
//! Any whitespace-separated numbers given on stdin are summed and printed
//! after the fixed examples.

use std::error::Error;
use std::io;

use num_bignumber::BigNumber;
use num_traits::{ToPrimitive, Zero};

fn main() -> Result<(), Box<dyn Error>> {
    let a = BigNumber::from(23);
    let b: BigNumber = "55555555555555555555555555555555555555555557777777777".parse()?;

    println!("{}", &a + &b);
    println!("{:e}", b.to_f64().unwrap_or(f64::NAN));
    println!("{}", &b * &b);
    println!("{}", a.pow(50));

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut total = BigNumber::zero();
    let mut count = 0usize;
    while let Some(n) = BigNumber::read_from(&mut input)? {
        total += n;
        count += 1;
    }
    if count > 0 {
        println!("sum of {} input values: {}", count, total);
    }
    Ok(())
}
