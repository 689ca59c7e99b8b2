//! Shared special-value check.
//!
//! Every conversion and stepping operation runs this check before touching
//! the arithmetic, so special patterns never reach the exact-decimal path.

use crate::error::SpecialValueError;

use super::double::BitPattern;

/// Fails if the pattern encodes Infinity or NaN.
///
/// Infinity is an all-ones exponent with an all-zero fraction; any other
/// all-ones-exponent pattern is NaN.
pub fn check_special(pattern: &BitPattern) -> Result<(), SpecialValueError> {
    if pattern.exponent().iter().all(|&bit| bit) {
        if pattern.fraction().iter().all(|&bit| !bit) {
            return Err(SpecialValueError::Infinity);
        }
        return Err(SpecialValueError::Nan);
    }
    Ok(())
}

/// Returns true if the biased exponent is zero (signed zero or subnormal).
pub(crate) fn is_zero_or_subnormal(pattern: &BitPattern) -> bool {
    pattern.exponent().iter().all(|&bit| !bit)
}
