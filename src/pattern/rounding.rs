//! Round-to-nearest, ties-to-even over bit sequences.

use crate::error::OverflowError;

use super::increment::increment_bits;

/// Rounds a bit sequence (MSB first) to `position` bits.
///
/// The rule, evaluated once per call:
/// - bit at `position` is 0: truncate;
/// - bit at `position` is 1 with any later bit 1: round up;
/// - exact tie (bit at `position` is 1, all later bits 0): round up only if
///   the retained LSB is 1 (odd), otherwise truncate.
///
/// Sequences no longer than `position` are returned unchanged. Rounding up
/// an all-ones prefix wraps it to zero and reports
/// `OverflowError::Increment`, leaving the caller to bump its exponent.
pub fn round_nearest_even(bits: &[bool], position: usize) -> Result<Vec<bool>, OverflowError> {
    if bits.len() <= position {
        return Ok(bits.to_vec());
    }

    let mut kept = bits[..position].to_vec();
    if !bits[position] {
        return Ok(kept);
    }

    let any_following = bits[position + 1..].iter().any(|&bit| bit);
    let retained_odd = position > 0 && bits[position - 1];
    if (any_following || retained_odd) && increment_bits(&mut kept) {
        return Err(OverflowError::Increment);
    }
    Ok(kept)
}
