//! Stepping to adjacent representable values.
//!
//! `next` and `previous` move a pattern to the neighboring representable
//! magnitude by incrementing or decrementing the fraction field, with carry
//! or borrow into the exponent field. The input and any carry-produced
//! pattern are validated through the special-value check, so stepping off the
//! finite range surfaces as `SpecialValueError::Infinity` rather than a
//! silently wrong pattern.

use crate::error::{FpError, OverflowError};

use super::double::BitPattern;
use super::increment::{decrement_bits, increment_bits};
use super::special::check_special;

/// Returns the pattern of the adjacent representable value with the next
/// larger magnitude.
///
/// Fails with `SpecialValueError` if the input or the result encodes
/// Infinity/NaN, and with `OverflowError` if the exponent field itself
/// cannot be incremented (only reachable from patterns that are already
/// special, so in practice the special check fires first).
pub fn next(pattern: &BitPattern) -> Result<BitPattern, FpError> {
    check_special(pattern)?;

    let mut fraction = *pattern.fraction();
    if !increment_bits(&mut fraction) {
        return Ok(BitPattern::from_fields(pattern.sign(), *pattern.exponent(), fraction));
    }

    // Fraction wrapped; the carry moves into the exponent field.
    let mut exponent = *pattern.exponent();
    if increment_bits(&mut exponent) {
        return Err(OverflowError::Increment.into());
    }
    let stepped = BitPattern::from_fields(pattern.sign(), exponent, fraction);
    check_special(&stepped)?;
    Ok(stepped)
}

/// Returns the pattern of the adjacent representable value with the next
/// smaller magnitude.
///
/// Mirror of [`next`]: borrow from the fraction moves into the exponent
/// field, stepping a minimum-normal pattern down into the subnormal range.
/// Decrementing a zero pattern fails with `OverflowError::Decrement`.
pub fn previous(pattern: &BitPattern) -> Result<BitPattern, FpError> {
    check_special(pattern)?;

    let mut fraction = *pattern.fraction();
    if !decrement_bits(&mut fraction) {
        return Ok(BitPattern::from_fields(pattern.sign(), *pattern.exponent(), fraction));
    }

    let mut exponent = *pattern.exponent();
    if decrement_bits(&mut exponent) {
        return Err(OverflowError::Decrement.into());
    }
    Ok(BitPattern::from_fields(pattern.sign(), exponent, fraction))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use crate::error::SpecialValueError;

    use super::*;

    fn pattern(text: &str) -> BitPattern {
        BitPattern::from_bit_str(text).expect("pattern should parse")
    }

    #[test]
    fn next_increments_fraction() {
        let start = pattern("0011111111110011001100110011001100110011001100110011001100110011");
        let stepped = next(&start).expect("step should succeed");
        assert_eq!(
            stepped.bit_string(),
            "0011111111110011001100110011001100110011001100110011001100110100"
        );
        assert_eq!(stepped.exponent(), start.exponent());
    }

    #[test]
    fn next_carries_into_exponent() {
        let start = pattern("0011111111111111111111111111111111111111111111111111111111111111");
        let stepped = next(&start).expect("step should succeed");
        assert_eq!(
            stepped.bit_string(),
            "0100000000000000000000000000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn next_is_one_ulp() {
        for value in [1.2, 0.1, 7.2, 1e300, f64::MIN_POSITIVE] {
            let stepped = next(&BitPattern::from_f64(value)).expect("step should succeed");
            assert_eq!(stepped.to_f64(), f64::from_bits(value.to_bits() + 1));
        }
    }

    #[test]
    fn next_past_max_finite_is_infinity() {
        let max = BitPattern::from_f64(f64::MAX);
        assert_eq!(next(&max), Err(FpError::Special(SpecialValueError::Infinity)));
    }

    #[test]
    fn next_rejects_special_inputs() {
        assert_eq!(
            next(&BitPattern::from_f64(f64::NAN)),
            Err(FpError::Special(SpecialValueError::Nan))
        );
        let nan = pattern("0111111111110011001100110011001100110011001100110011001100110011");
        assert_eq!(next(&nan), Err(FpError::Special(SpecialValueError::Nan)));
        assert_eq!(
            next(&BitPattern::from_f64(f64::INFINITY)),
            Err(FpError::Special(SpecialValueError::Infinity))
        );
    }

    #[test]
    fn previous_borrows_into_exponent() {
        // Stepping 1.0 down lands on the largest value of the previous binade.
        let one = BitPattern::from_f64(1.0);
        let stepped = previous(&one).expect("step should succeed");
        assert_eq!(stepped.to_f64(), f64::from_bits(1.0f64.to_bits() - 1));
        assert!(stepped.fraction().iter().all(|&bit| bit));
    }

    #[test]
    fn previous_of_min_normal_is_subnormal() {
        let min_normal = BitPattern::from_f64(f64::MIN_POSITIVE);
        let stepped = previous(&min_normal).expect("step should succeed");
        assert_eq!(stepped.biased_exponent(), 0);
        assert!(stepped.to_f64().is_subnormal());
    }

    #[test]
    fn previous_of_zero_underflows() {
        assert_eq!(
            previous(&BitPattern::from_f64(0.0)),
            Err(FpError::Overflow(OverflowError::Decrement))
        );
    }

    #[test]
    fn previous_inverts_next() {
        let start = BitPattern::from_f64(1.2);
        let there = next(&start).expect("step should succeed");
        let back = previous(&there).expect("step should succeed");
        assert_eq!(back, start);
    }
}
