// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Integer primitives used by fraction reduction and normalization.

use num_traits::Signed;

/// Calculates the Greatest Common Divisor (GCD) of `x` and `y` by repeated
/// remainder.
///
/// Either argument may be negative or zero. The result is always
/// non-negative, and `gcd(0, 0) == 0`.
///
/// # Examples
///
/// ```
/// use frac::gcd;
/// assert_eq!(gcd(6, 8), 2);
/// assert_eq!(gcd(-3, 5), 1);
/// assert_eq!(gcd(-4, 0), 4);
/// ```
#[inline]
pub fn gcd<T: Clone + Signed>(x: T, y: T) -> T {
    let mut m = x;
    let mut n = y;
    while !n.is_zero() {
        // MIN % -1 overflows, but every integer is a multiple of -1
        let r = if n == -T::one() { T::zero() } else { m % n.clone() };
        m = n;
        n = r;
    }
    m.abs()
}

/// Calculates the Lowest Common Multiple (LCM) of `x` and `y`.
///
/// When `x == y` or `x == -y`, `x` is returned as-is, so the result keeps the
/// sign of `x` in that case. Otherwise the result is non-negative.
///
/// `x` is divided by the GCD before multiplying by `y`, which keeps the
/// intermediate value as small as possible but does not prevent overflow.
///
/// # Examples
///
/// ```
/// use frac::lcm;
/// assert_eq!(lcm(-3, 5), 15);
/// assert_eq!(lcm(2, 4), 4);
/// assert_eq!(lcm(-4, 4), -4);
/// ```
#[inline]
pub fn lcm<T: Clone + Signed>(x: T, y: T) -> T {
    if x == y || x == -y.clone() {
        return x;
    }
    (x.clone() / gcd(x, y.clone()) * y).abs()
}

macro_rules! test_integer_primitives {
    ($T:ty, $test_mod:ident) => {
        #[cfg(test)]
        mod $test_mod {
            use super::{gcd, lcm};

            #[test]
            fn test_gcd() {
                assert_eq!(gcd(10 as $T, 2), 2 as $T);
                assert_eq!(gcd(10 as $T, 3), 1 as $T);
                assert_eq!(gcd(0 as $T, 3), 3 as $T);
                assert_eq!(gcd(3 as $T, 3), 3 as $T);
                assert_eq!(gcd(56 as $T, 42), 14 as $T);
                assert_eq!(gcd(3 as $T, -3), 3 as $T);
                assert_eq!(gcd(-6 as $T, 3), 3 as $T);
                assert_eq!(gcd(-4 as $T, -2), 2 as $T);
            }

            #[test]
            fn test_gcd_min_by_neg_one() {
                assert_eq!(gcd(<$T>::MIN, -1), 1 as $T);
                assert_eq!(gcd(-1 as $T, <$T>::MIN), 1 as $T);
                assert_eq!(gcd(<$T>::MIN, 1), 1 as $T);
            }

            #[test]
            fn test_gcd_zero() {
                assert_eq!(gcd(0 as $T, 0), 0 as $T);
                assert_eq!(gcd(-7 as $T, 0), 7 as $T);
                assert_eq!(gcd(0 as $T, -7), 7 as $T);
            }

            #[test]
            fn test_lcm() {
                assert_eq!(lcm(1 as $T, 0), 0 as $T);
                assert_eq!(lcm(0 as $T, 1), 0 as $T);
                assert_eq!(lcm(1 as $T, 1), 1 as $T);
                assert_eq!(lcm(8 as $T, 9), 72 as $T);
                assert_eq!(lcm(11 as $T, 5), 55 as $T);
                assert_eq!(lcm(-6 as $T, 4), 12 as $T);
                assert_eq!(lcm(6 as $T, -4), 12 as $T);
            }

            #[test]
            fn test_lcm_same_magnitude() {
                // the first argument comes back untouched, sign included
                assert_eq!(lcm(0 as $T, 0), 0 as $T);
                assert_eq!(lcm(-4 as $T, 4), -4 as $T);
                assert_eq!(lcm(4 as $T, -4), 4 as $T);
                assert_eq!(lcm(-4 as $T, -4), -4 as $T);
            }

            #[test]
            fn test_factors() {
                let factors: [($T, $T, $T, $T); 6] = [
                    (2, 3, 1, 6),
                    (2, 4, 2, 4),
                    (3, 5, 1, 15),
                    (-3, 5, 1, 15),
                    (3, -5, 1, 15),
                    (-3, -5, 1, 15),
                ];
                for &(a, b, g, l) in factors.iter() {
                    assert_eq!(gcd(a, b), g, "gcd({}, {})", a, b);
                    assert_eq!(lcm(a, b), l, "lcm({}, {})", a, b);
                }
            }
        }
    };
}

test_integer_primitives!(i8, test_integer_i8);
test_integer_primitives!(i32, test_integer_i32);
test_integer_primitives!(i64, test_integer_i64);
test_integer_primitives!(isize, test_integer_isize);

#[test]
fn test_lcm_divides_first() {
    // 0x40 * 0x04 overflows i8, but 0x40 / 4 * 4 does not
    let x: i8 = 0x40;
    let y: i8 = 0x04;
    assert!(x.checked_mul(y).is_none());
    assert_eq!(lcm(x, y), 0x40);
    assert_eq!(lcm(y, x), 0x40);

    assert_eq!(lcm(46656000000000000_i64, 600), 46656000000000000);
}
