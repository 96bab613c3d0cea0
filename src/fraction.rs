// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Non-reducing fractions

use core::cmp;
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};
use core::str::FromStr;

use num_integer::Integer;
use num_traits::{Num, One, Signed, ToPrimitive, Zero};

use crate::integer::{gcd, lcm};

/// A fraction with no invariants.
///
/// Both fields can take any combination of values: the denominator may be
/// zero or negative, and the terms are never reduced unless asked for with
/// [`reduce`](Frac::reduce) or one of the normalizations. All operations
/// return a new `Frac` and never panic, except for [`assert`](Frac::assert)
/// and a reduction of `0/0`.
///
/// Equality is structural: `1/2` and `2/4` are not equal. Use
/// [`cmp`](Frac::cmp) to compare values.
#[derive(Copy, Clone, Hash, Debug, PartialEq, Eq)]
pub struct Frac<T> {
    numer: T,
    denom: T,
}

/// Alias for a `Frac` of machine-sized integers.
pub type F = Frac<isize>;
/// Alias for a `Frac` of 32-bit-sized integers.
pub type Frac32 = Frac<i32>;
/// Alias for a `Frac` of 64-bit-sized integers.
pub type Frac64 = Frac<i64>;

impl<T> Frac<T> {
    /// Creates a `Frac` from its raw parts. Nothing is checked or reduced.
    #[inline]
    pub const fn new_raw(numer: T, denom: T) -> Frac<T> {
        Frac { numer, denom }
    }

    /// Gets an immutable reference to the numerator.
    #[inline]
    pub fn numer(&self) -> &T {
        &self.numer
    }

    /// Gets an immutable reference to the denominator.
    #[inline]
    pub fn denom(&self) -> &T {
        &self.denom
    }
}

impl<T: Clone + Integer + Signed> Frac<T> {
    /// Creates a `Frac` representing the integer `t`.
    #[inline]
    pub fn from_integer(t: T) -> Frac<T> {
        Frac::new_raw(t, One::one())
    }

    /// Returns true if the denominator is 1.
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Returns true if the fraction has no value because its denominator is
    /// zero.
    #[inline]
    pub fn is_zero_denom(&self) -> bool {
        self.denom.is_zero()
    }

    /// Returns an equivalent fraction in lowest terms, with a non-negative
    /// denominator.
    ///
    /// # Panics
    ///
    /// Panics on `0/0`, whose GCD is zero.
    pub fn reduce(&self) -> Frac<T> {
        let g = gcd(self.numer.clone(), self.denom.clone());
        let numer = self.numer.clone() / g.clone();
        let denom = self.denom.clone() / g;

        // keep denom positive!
        if denom.is_negative() {
            Frac::new_raw(-numer, -denom)
        } else {
            Frac::new_raw(numer, denom)
        }
    }

    /// Returns `self` rescaled to the least common multiple of its reduced
    /// denominator and the denominator of `other`.
    ///
    /// The scale factor is taken against the unreduced denominator of `self`,
    /// so a non-reduced `self` whose denominator does not divide the common
    /// multiple loses precision to integer division.
    ///
    /// ```
    /// use frac::F;
    /// assert_eq!(F::new_raw(4, 3).norm_to(&F::new_raw(3, 2)), F::new_raw(8, 6));
    /// assert_eq!(F::new_raw(12, 2).norm_to(&F::new_raw(3, 4)), F::new_raw(24, 4));
    /// ```
    pub fn norm_to(&self, other: &Frac<T>) -> Frac<T> {
        if self.denom == other.denom {
            return self.clone();
        }
        let m = lcm(self.reduce().denom, other.denom.clone());
        self.scale_to(m)
    }

    /// Returns the inversion of `self`, moving a negative numerator's sign
    /// onto the new numerator.
    #[inline]
    pub fn inv(&self) -> Frac<T> {
        if self.numer.is_negative() {
            Frac::new_raw(-self.denom.clone(), -self.numer.clone())
        } else {
            Frac::new_raw(self.denom.clone(), self.numer.clone())
        }
    }

    /// Returns the distance of `self` from zero, taking the absolute value of
    /// each field.
    #[inline]
    pub fn abs(&self) -> Frac<T> {
        Frac::new_raw(self.numer.abs(), self.denom.abs())
    }

    /// Compares the values of `self` and `other`.
    ///
    /// Unequal denominators are cross-multiplied. Denominator signs are not
    /// normalized first, so the result is inverted when exactly one of the
    /// denominators is negative.
    // Not `Ord`: equality is structural, so 1/2 and 2/4 compare Equal here
    // while being unequal under `==`.
    #[allow(clippy::should_implement_trait)]
    pub fn cmp(&self, other: &Frac<T>) -> cmp::Ordering {
        if self.denom == other.denom {
            return self.numer.cmp(&other.numer);
        }
        let lhs = self.numer.clone() * other.denom.clone();
        let rhs = other.numer.clone() * self.denom.clone();
        lhs.cmp(&rhs)
    }

    /// Returns true if exactly one of the numerator and denominator is
    /// negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numer.is_negative() != self.denom.is_negative()
    }

    /// Panics if the denominator is zero, returning `self` otherwise.
    #[inline]
    pub fn assert(&self) -> Frac<T> {
        if self.denom.is_zero() {
            panic!("attempt to divide by zero");
        }
        self.clone()
    }

    /// Parses `numer/denom` or just `numer`, where the numbers are in base
    /// `radix`.
    ///
    /// Only the first `/` splits. A missing or empty denominator is taken as
    /// 1, and a zero denominator is accepted. Whitespace is not trimmed.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Frac<T>, ParseFracError> {
        let (n, d) = s.split_once('/').unwrap_or((s, ""));

        let numer = <T as Num>::from_str_radix(n, radix)
            .map_err(|_| ParseFracError { kind: FracErrorKind::InvalidNumer })?;
        let denom = if d.is_empty() {
            One::one()
        } else {
            <T as Num>::from_str_radix(d, radix)
                .map_err(|_| ParseFracError { kind: FracErrorKind::InvalidDenom })?
        };

        Ok(Frac::new_raw(numer, denom))
    }

    fn scale_to(&self, m: T) -> Frac<T> {
        Frac::new_raw(m.clone() / self.denom.clone() * self.numer.clone(), m)
    }
}

impl<T: ToPrimitive> Frac<T> {
    /// Returns the floating-point approximation of `self`.
    ///
    /// A zero denominator gives an infinity or NaN rather than a panic.
    pub fn to_f64(&self) -> f64 {
        match (self.numer.to_f64(), self.denom.to_f64()) {
            (Some(n), Some(d)) => n / d,
            _ => f64::NAN,
        }
    }
}

/// Returns bidirectionally normalized equivalents of `x` and `y`.
///
/// The shared denominator is the least common multiple of both reduced
/// denominators, raised to `x`'s denominator if it does not exceed it, or
/// else to `y`'s if it falls below that. Unlike [`Frac::norm_to`], the
/// shared denominator may be smaller than one of the inputs' denominators,
/// in which case that input is truncated by the integer scale factor.
///
/// ```
/// use frac::{norm, F};
/// let (a, b) = norm(F::new_raw(12, 2), F::new_raw(3, 4));
/// assert_eq!((a, b), (F::new_raw(24, 4), F::new_raw(3, 4)));
/// ```
pub fn norm<T: Clone + Integer + Signed>(x: Frac<T>, y: Frac<T>) -> (Frac<T>, Frac<T>) {
    if x.denom == y.denom {
        return (x, y);
    }
    let mut m = lcm(x.reduce().denom, y.reduce().denom);
    if m <= x.denom {
        m = x.denom.clone();
    } else if m < y.denom {
        m = y.denom.clone();
    }
    (x.scale_to(m.clone()), y.scale_to(m))
}

// From integer
impl<T> From<T> for Frac<T>
where
    T: Clone + Integer + Signed,
{
    fn from(x: T) -> Frac<T> {
        Frac::from_integer(x)
    }
}

// From pair, taken as-is
impl<T> From<(T, T)> for Frac<T> {
    fn from(pair: (T, T)) -> Frac<T> {
        Frac::new_raw(pair.0, pair.1)
    }
}

impl<T> From<Frac<T>> for (T, T) {
    fn from(x: Frac<T>) -> (T, T) {
        (x.numer, x.denom)
    }
}

macro_rules! forward_val_val_binop {
    (impl $imp:ident, $method:ident) => {
        impl<T: Clone + Integer + Signed> $imp<Frac<T>> for Frac<T> {
            type Output = Frac<T>;

            #[inline]
            fn $method(self, other: Frac<T>) -> Frac<T> {
                (&self).$method(&other)
            }
        }
    };
}

macro_rules! forward_ref_val_binop {
    (impl $imp:ident, $method:ident) => {
        impl<'a, T> $imp<Frac<T>> for &'a Frac<T>
        where
            T: Clone + Integer + Signed,
        {
            type Output = Frac<T>;

            #[inline]
            fn $method(self, other: Frac<T>) -> Frac<T> {
                self.$method(&other)
            }
        }
    };
}

macro_rules! forward_val_ref_binop {
    (impl $imp:ident, $method:ident) => {
        impl<'a, T> $imp<&'a Frac<T>> for Frac<T>
        where
            T: Clone + Integer + Signed,
        {
            type Output = Frac<T>;

            #[inline]
            fn $method(self, other: &Frac<T>) -> Frac<T> {
                (&self).$method(other)
            }
        }
    };
}

macro_rules! forward_all_binop {
    (impl $imp:ident, $method:ident) => {
        forward_val_val_binop!(impl $imp, $method);
        forward_ref_val_binop!(impl $imp, $method);
        forward_val_ref_binop!(impl $imp, $method);
    };
}

// Arithmetic
forward_all_binop!(impl Mul, mul);
// a/b * c/d = (a*c)/(b*d)
impl<'a, 'b, T> Mul<&'b Frac<T>> for &'a Frac<T>
where
    T: Clone + Integer + Signed,
{
    type Output = Frac<T>;

    #[inline]
    fn mul(self, rhs: &Frac<T>) -> Frac<T> {
        Frac::new_raw(
            self.numer.clone() * rhs.numer.clone(),
            self.denom.clone() * rhs.denom.clone(),
        )
    }
}

forward_all_binop!(impl Div, div);
// (a/b) / (c/d) = (a*d)/(b*c), with the sign of a negative c moved onto d
impl<'a, 'b, T> Div<&'b Frac<T>> for &'a Frac<T>
where
    T: Clone + Integer + Signed,
{
    type Output = Frac<T>;

    #[inline]
    fn div(self, rhs: &Frac<T>) -> Frac<T> {
        let (numer, denom) = if rhs.numer.is_negative() {
            (-rhs.numer.clone(), -rhs.denom.clone())
        } else {
            (rhs.numer.clone(), rhs.denom.clone())
        };
        Frac::new_raw(self.numer.clone() * denom, self.denom.clone() * numer)
    }
}

// Abstracts the a/b `op` c/d = (a*d `op` b*c) / (b*d) pattern, which
// collapses to (a `op` c) / b when the denominators already match
macro_rules! arith_impl {
    (impl $imp:ident, $method:ident) => {
        forward_all_binop!(impl $imp, $method);
        impl<'a, 'b, T: Clone + Integer + Signed> $imp<&'b Frac<T>> for &'a Frac<T> {
            type Output = Frac<T>;

            #[inline]
            fn $method(self, rhs: &Frac<T>) -> Frac<T> {
                if self.denom == rhs.denom {
                    return Frac::new_raw(
                        self.numer.clone().$method(rhs.numer.clone()),
                        self.denom.clone(),
                    );
                }
                Frac::new_raw(
                    (self.numer.clone() * rhs.denom.clone())
                        .$method(rhs.numer.clone() * self.denom.clone()),
                    self.denom.clone() * rhs.denom.clone(),
                )
            }
        }
    };
}

// a/b + c/d = (a*d + b*c)/(b*d)
arith_impl!(impl Add, add);

// a/b - c/d = (a*d - b*c)/(b*d)
arith_impl!(impl Sub, sub);

impl<T> Neg for Frac<T>
where
    T: Clone + Integer + Signed,
{
    type Output = Frac<T>;

    #[inline]
    fn neg(self) -> Frac<T> {
        Frac::new_raw(-self.numer, self.denom)
    }
}

impl<'a, T> Neg for &'a Frac<T>
where
    T: Clone + Integer + Signed,
{
    type Output = Frac<T>;

    #[inline]
    fn neg(self) -> Frac<T> {
        -self.clone()
    }
}

// Constants
impl<T: Clone + Integer + Signed> Zero for Frac<T> {
    #[inline]
    fn zero() -> Frac<T> {
        Frac::new_raw(Zero::zero(), One::one())
    }

    /// True for any zero numerator, whatever the denominator.
    #[inline]
    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl<T: Clone + Integer + Signed> One for Frac<T> {
    #[inline]
    fn one() -> Frac<T> {
        Frac::new_raw(One::one(), One::one())
    }
}

// String conversions
impl<T> fmt::Display for Frac<T>
where
    T: fmt::Display + Clone + Signed,
{
    /// Renders as `numer/denom`, with a negative denominator's sign moved
    /// onto the numerator.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.denom.is_negative() {
            write!(f, "{}/{}", -self.numer.clone(), -self.denom.clone())
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl<T: Clone + Integer + Signed> FromStr for Frac<T> {
    type Err = ParseFracError;

    /// Parses `numer/denom` or just `numer` in base 10.
    fn from_str(s: &str) -> Result<Frac<T>, ParseFracError> {
        Frac::from_str_radix(s, 10)
    }
}

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Frac<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&(&self.numer, &self.denom), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Frac<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (numer, denom) = serde::Deserialize::deserialize(deserializer)?;
        Ok(Frac::new_raw(numer, denom))
    }
}

/// An error which can be returned when parsing a fraction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ParseFracError {
    kind: FracErrorKind,
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum FracErrorKind {
    InvalidNumer,
    InvalidDenom,
}

impl fmt::Display for ParseFracError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.kind.description())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseFracError {}

impl FracErrorKind {
    fn description(&self) -> &'static str {
        match *self {
            FracErrorKind::InvalidNumer => "failed to parse numerator",
            FracErrorKind::InvalidDenom => "failed to parse denominator",
        }
    }
}
