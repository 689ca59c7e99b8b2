//! Shared test utilities.
//!
//! Helper constructors used across test modules to keep known-answer tests
//! readable.

#![allow(clippy::expect_used)]

use std::str::FromStr;

use crate::decimal::Decimal;
use crate::pattern::BitPattern;

/// Parses a 64-character bit string, panicking on malformed input.
///
/// # Examples
/// ```ignore
/// let one_point_two = pat("0011111111110011001100110011001100110011001100110011001100110011");
/// ```
pub fn pat(bits: &str) -> BitPattern {
    BitPattern::from_bit_str(bits).expect("test bit pattern should parse")
}

/// Parses a plain decimal literal, panicking on malformed input.
///
/// # Examples
/// ```ignore
/// let exact = dec("1.1999999999999999555910790149937383830547332763671875");
/// ```
pub fn dec(text: &str) -> Decimal {
    Decimal::from_str(text).expect("test decimal should parse")
}
