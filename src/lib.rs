#![warn(
    clippy::shadow_reuse,
    clippy::shadow_same,
    clippy::shadow_unrelated,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::panic,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

//! Exact IEEE-754 double-precision binary/decimal analysis.
//!
//! This crate decomposes the 64-bit layout of a double into its sign,
//! exponent, and fraction fields, computes the mathematically *exact*
//! decimal value of a pattern (every finite double is a dyadic rational, so
//! the expansion terminates), steps between adjacent representable values,
//! and analyzes how decimal literals map onto binary values:
//!
//! - [`BitPattern`]: the decomposed 64-bit layout, convertible to/from
//!   native doubles, bit strings, and hex strings.
//! - [`to_exact`]: a pattern's exact decimal value and unbiased exponent.
//! - [`next`] / [`previous`]: adjacent representable values with carry and
//!   borrow between the fraction and exponent fields.
//! - [`round_nearest_even`]: ties-to-even rounding of bit sequences, used
//!   by the manual single-precision encoder [`encode_single`].
//! - [`shortest_roundtrip`]: the minimal decimal digit count (and string)
//!   reconstructing a given double.
//! - [`segment_from_exponent`] / [`segment_from_value`]: exact binade
//!   boundaries and step size.
//! - [`map_ndigit_decimals`]: every d-digit decimal parsing to one double.
//! - [`AscendingValues`]: a cursor over the positive doubles in order.
//!
//! The core is purely functional: every type is an immutable value, no
//! operation performs I/O, and concurrent read-only use needs no
//! synchronization.

mod decimal;
mod error;
mod exact;
mod generator;
mod mapper;
mod pattern;
mod roundtrip;
mod segment;
#[cfg(test)]
mod test_utils;

pub use decimal::{Decimal, DecimalError};
pub use error::{FormatError, FpError, OverflowError, PreconditionError, SpecialValueError};
pub use exact::{to_exact, ExactValue};
pub use generator::AscendingValues;
pub use mapper::{map_ndigit_decimals, DecimalToFloatMapping};
pub use pattern::{
    check_special, encode_single, next, previous, round_nearest_even, BitPattern, EXPONENT_BIAS,
    EXPONENT_BITS, FRACTION_BITS, TOTAL_BITS,
};
pub use roundtrip::{shortest_roundtrip, RoundTripResult};
pub use segment::{segment_from_exponent, segment_from_value, Segment};

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn bit_patterns_round_trip_through_exact_values() {
        // to_bits(to_exact(b).native_approximation) == b for normal finite b.
        for value in [1.2, 7.2, -0.1, 4503599627370496.0, 1e-300, f64::MAX] {
            let pattern = BitPattern::from_f64(value);
            let exact = to_exact(&pattern).expect("finite pattern");
            assert_eq!(BitPattern::from_f64(exact.native_approximation()), pattern);
        }
    }

    #[test]
    fn stepping_preserves_the_exponent_until_the_fraction_wraps() {
        let mut pattern = BitPattern::from_f64(1.2);
        let exponent = *pattern.exponent();
        let mut exact = to_exact(&pattern).expect("finite pattern");
        for _ in 0..10 {
            let stepped = next(&pattern).expect("still finite");
            let stepped_exact = to_exact(&stepped).expect("finite pattern");
            assert!(stepped_exact.exact_decimal() > exact.exact_decimal());
            assert_eq!(stepped.exponent(), &exponent);
            pattern = stepped;
            exact = stepped_exact;
        }
    }

    #[test]
    fn the_step_distance_matches_the_segment() {
        let pattern = BitPattern::from_f64(1.2);
        let segment = segment_from_value(1.2).expect("normal value");
        let here = to_exact(&pattern).expect("finite pattern");
        let there = to_exact(&next(&pattern).expect("still finite")).expect("finite pattern");
        assert_eq!(
            &there.exact_decimal().sub(here.exact_decimal()),
            segment.step_distance()
        );
    }

    #[test]
    fn shortest_roundtrip_agrees_with_the_mapper() {
        // The shortest string is one of the same-count decimals that map to
        // the double it parses to.
        let result = shortest_roundtrip("7.1000000000000034345").expect("valid input");
        let value: f64 = result.shortest_decimal_string().parse().expect("parses");
        let mapping = map_ndigit_decimals(value, result.digit_count()).expect("normal value");
        let shortest: Decimal = result.shortest_decimal_string().parse().expect("decimal");
        assert!(mapping.numbers().contains(&shortest));
    }
}
