//! Binade analysis.
//!
//! A segment is the set of doubles sharing one unbiased exponent `e`:
//! the half-open interval `[2^e, 2^(e+1))` containing 2^52 representable
//! values spaced `2^(e-52)` apart. Every quantity is computed as an exact
//! power of two; native floating-point exponentiation is never used.

use crate::decimal::Decimal;
use crate::error::{FpError, PreconditionError};
use crate::exact::to_exact;
use crate::pattern::{is_zero_or_subnormal, BitPattern, FRACTION_BITS};

/// Smallest unbiased exponent of a normal double.
const MIN_EXPONENT: i32 = -1022;
/// Largest unbiased exponent of a finite double.
const MAX_EXPONENT: i32 = 1023;

/// One binade: its exponent, exact bounds, and step distance (ULP).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    unbiased_exponent: i32,
    min_value: Decimal,
    max_value: Decimal,
    step_distance: Decimal,
}

impl Segment {
    /// Returns the unbiased exponent shared by the segment's values.
    pub fn unbiased_exponent(&self) -> i32 {
        self.unbiased_exponent
    }

    /// Returns the smallest value of the segment, `2^e`, exactly.
    pub fn min_value(&self) -> &Decimal {
        &self.min_value
    }

    /// Returns the largest value of the segment,
    /// `2^(e+1) * (1 - 2^-53) = 2^(e+1) - 2^(e-52)`, exactly.
    pub fn max_value(&self) -> &Decimal {
        &self.max_value
    }

    /// Returns the distance between adjacent values, `2^(e-52)`, exactly.
    pub fn step_distance(&self) -> &Decimal {
        &self.step_distance
    }
}

/// Computes the segment of a given unbiased exponent.
///
/// The exponent must lie in the normal range `[-1022, 1023]`.
pub fn segment_from_exponent(exponent: i32) -> Result<Segment, PreconditionError> {
    if !(MIN_EXPONENT..=MAX_EXPONENT).contains(&exponent) {
        return Err(PreconditionError::ExponentOutOfRange { exponent });
    }
    let e = exponent as i64;
    let min_value = Decimal::pow2(e);
    let step_distance = Decimal::pow2(e - FRACTION_BITS as i64);
    let max_value = Decimal::pow2(e + 1).sub(&step_distance);
    Ok(Segment { unbiased_exponent: exponent, min_value, max_value, step_distance })
}

/// Computes the segment containing a given double.
///
/// The exponent is read from the value's bit pattern. Specials surface as
/// `SpecialValueError`; zero and subnormals have no binade in the normal
/// sense and are precondition errors.
pub fn segment_from_value(value: f64) -> Result<Segment, FpError> {
    let pattern = BitPattern::from_f64(value);
    let exact = to_exact(&pattern)?;
    if is_zero_or_subnormal(&pattern) {
        let precondition = if exact.exact_decimal().is_zero() {
            PreconditionError::ZeroValue
        } else {
            PreconditionError::SubnormalRange
        };
        return Err(precondition.into());
    }
    Ok(segment_from_exponent(exact.unbiased_exponent())?)
}
