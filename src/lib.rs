// Copyright 2014-2016 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A lightweight fraction type for exact ratio arithmetic.
//!
//! Unlike most rational types, [`Frac`] keeps its numerator and denominator
//! exactly as given: nothing is simplified automatically, and the
//! denominator may be zero or negative. This suits ratios that matter both
//! in lowest terms and as the original pair of integers, such as video
//! dimensions and aspect ratios.
//!
//! Arithmetic never reduces and never checks for overflow. The result of
//! `x + y`, `x - y` or `x * y` has a denominator at least as large as
//! either input's, so use [`Frac::reduce`], [`Frac::norm_to`] or [`norm`] to
//! keep terms small.
//!
//! ## Example
//!
//! ```
//! use frac::{norm, F};
//!
//! let wide: F = "1920/1080".parse().unwrap();
//! assert_eq!(wide.reduce().to_string(), "16/9");
//!
//! let half = F::new_raw(1, 2);
//! assert_eq!((half + wide).to_string(), "4920/2160");
//!
//! let (a, b) = norm(F::new_raw(4, 3), F::new_raw(3, 2));
//! assert_eq!((a.to_string(), b.to_string()), ("8/6".to_string(), "9/6".to_string()));
//! ```
//!
//! ## Features
//!
//! - `std` (default): implements `std::error::Error` for [`ParseFracError`].
//!   Without it the crate is `no_std`.
//! - `serde`: (de)serializes a [`Frac`] as a `(numer, denom)` tuple.
//! - `quickcheck`: implements `quickcheck::Arbitrary` for [`Frac`].
#![doc(html_root_url = "https://docs.rs/frac/0.1")]
#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

pub use crate::fraction::{norm, Frac, Frac32, Frac64, ParseFracError, F};
pub use crate::integer::{gcd, lcm};

mod fraction;
mod integer;
#[cfg(feature = "quickcheck")]
mod quickcheck_impls;
