// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Grade-school algorithms on decimal magnitudes.
//!
//! A magnitude is a slice of digits `0..=9`, least-significant first. Unless
//! noted otherwise, inputs are expected to be trimmed: no most-significant
//! zero, and zero itself is `[0]`.

use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering::{self, Equal, Less};

pub(crate) const RADIX: u8 = 10;

/// Strip most-significant zeros down to the single digit zero needs.
#[inline]
pub(crate) fn trim(v: &mut Vec<u8>) {
    while v.len() > 1 && v.last() == Some(&0) {
        v.pop();
    }
    if v.is_empty() {
        v.push(0);
    }
}

#[inline]
pub(crate) fn is_zero(a: &[u8]) -> bool {
    a == [0]
}

/// Compare two trimmed magnitudes: fewer digits is smaller, otherwise the
/// first differing digit from the most-significant end decides.
pub(crate) fn cmp_slice(a: &[u8], b: &[u8]) -> Ordering {
    debug_assert!(a.last() != Some(&0) || a.len() == 1);
    debug_assert!(b.last() != Some(&0) || b.len() == 1);

    match a.len().cmp(&b.len()) {
        Equal => a.iter().rev().cmp(b.iter().rev()),
        ord => ord,
    }
}

/// Add `b` into `acc`, with `b`'s least-significant digit aligned at
/// position `shift` of `acc`.
fn add_shifted(acc: &mut Vec<u8>, b: &[u8], shift: usize) {
    let end = shift + b.len();
    if acc.len() < end {
        acc.resize(end, 0);
    }

    let mut carry = 0;
    for (a, &y) in acc[shift..end].iter_mut().zip(b) {
        let sum = *a + y + carry;
        *a = sum % RADIX;
        carry = sum / RADIX;
    }
    for a in acc[end..].iter_mut() {
        if carry == 0 {
            break;
        }
        let sum = *a + carry;
        *a = sum % RADIX;
        carry = sum / RADIX;
    }
    if carry > 0 {
        acc.push(carry);
    }
}

/// Sum of two magnitudes; at most one digit longer than the longer input.
pub(crate) fn add2(a: &[u8], b: &[u8]) -> Vec<u8> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut sum = Vec::with_capacity(long.len() + 1);
    sum.extend_from_slice(long);
    add_shifted(&mut sum, short, 0);
    sum
}

/// Subtract `b` from `a` in place with borrow propagation.
///
/// Panics in debug builds if `b > a`.
pub(crate) fn sub2(a: &mut Vec<u8>, b: &[u8]) {
    debug_assert!(cmp_slice(a, b) != Less);

    let mut borrow = 0;
    for (i, x) in a.iter_mut().enumerate() {
        let y = b.get(i).copied().unwrap_or(0) + borrow;
        if y == 0 && i >= b.len() {
            break;
        }
        if *x >= y {
            *x -= y;
            borrow = 0;
        } else {
            *x = *x + RADIX - y;
            borrow = 1;
        }
    }
    debug_assert!(borrow == 0, "magnitude subtraction underflowed");
    trim(a);
}

/// Difference `a - b` of two magnitudes where `a >= b`.
pub(crate) fn sub2rev(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut diff = a.to_vec();
    sub2(&mut diff, b);
    diff
}

/// Product of two magnitudes: for each digit `d` at position `i` of `a`,
/// `b` shifted left by `i` places is added `d` times.
pub(crate) fn mul3(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut prod = Vec::with_capacity(a.len() + b.len());
    prod.push(0);
    if is_zero(b) {
        return prod;
    }

    for (shift, &d) in a.iter().enumerate() {
        for _ in 0..d {
            add_shifted(&mut prod, b, shift);
        }
    }
    trim(&mut prod);
    prod
}

/// Long division of magnitudes, returning `(quotient, remainder)`.
///
/// Each step shifts the running remainder one decimal place, brings down the
/// next digit of `u`, and subtracts `d` while it still fits; the number of
/// subtractions is the quotient digit, never more than nine.
///
/// Panics if `d` is zero; callers check first.
pub(crate) fn div_rem(u: &[u8], d: &[u8]) -> (Vec<u8>, Vec<u8>) {
    assert!(!is_zero(d), "attempt to divide by zero");

    if cmp_slice(u, d) == Less {
        return (vec![0], u.to_vec());
    }

    let mut q = vec![0; u.len()];
    let mut r = Vec::with_capacity(d.len() + 1);
    r.push(0);
    for (i, &digit) in u.iter().enumerate().rev() {
        r.insert(0, digit);
        trim(&mut r);
        while cmp_slice(&r, d) != Less {
            sub2(&mut r, d);
            q[i] += 1;
        }
        debug_assert!(q[i] < RADIX);
    }
    trim(&mut q);
    (q, r)
}
