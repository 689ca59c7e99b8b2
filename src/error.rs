//! Error types for the conversion engine.
//!
//! Fallible operations report one of four taxonomy kinds rather than a
//! sentinel value:
//! - `FormatError`: malformed bit-string input
//! - `SpecialValueError`: the pattern under examination encodes Infinity/NaN
//! - `OverflowError`: a bit-field increment/decrement has no same-width result
//! - `PreconditionError`: an argument violates a documented precondition
//!
//! `FpError` aggregates the four kinds for operations that can fail in more
//! than one way.

use std::fmt;

/// Errors raised while parsing a textual bit pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormatError {
    /// The input does not have the required number of bits.
    Length { expected: usize, actual: usize },
    /// The input contains a character other than '0' or '1'.
    InvalidBit { position: usize, found: char },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { expected, actual } => {
                write!(f, "bit string must have {expected} characters, got {actual}")
            }
            Self::InvalidBit { position, found } => {
                write!(f, "invalid bit {found:?} at position {position}")
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// The bit pattern encodes a non-finite IEEE-754 value.
///
/// Raised by the shared special-value check before any arithmetic is
/// attempted, and again after any stepping operation that produced a new
/// special pattern. Reaching the Infinity pattern by stepping is the
/// *expected* transition out of the finite range and is reported with this
/// type, not with [`OverflowError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpecialValueError {
    /// All-ones exponent with an all-zero fraction.
    Infinity,
    /// All-ones exponent with a nonzero fraction.
    Nan,
}

impl fmt::Display for SpecialValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Infinity => write!(f, "bit pattern encodes Infinity"),
            Self::Nan => write!(f, "bit pattern encodes NaN"),
        }
    }
}

impl std::error::Error for SpecialValueError {}

/// A bit-field increment or decrement could not produce a valid same-width
/// result (every bit was already 1, respectively 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverflowError {
    /// Carry propagated past the most significant bit.
    Increment,
    /// Borrow propagated past the most significant bit.
    Decrement,
}

impl fmt::Display for OverflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Increment => write!(f, "increment overflowed the available bit width"),
            Self::Decrement => write!(f, "decrement underflowed the available bit width"),
        }
    }
}

impl std::error::Error for OverflowError {}

/// An argument violates a documented precondition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreconditionError {
    /// The generator seed must be zero or positive.
    NegativeSeed,
    /// Decimal input must be non-empty.
    EmptyInput,
    /// Exponential notation is not supported for decimal input.
    ExponentialNotation,
    /// Decimal input contains a character that is not a digit, sign, or point.
    InvalidDecimal { position: usize, found: char },
    /// The requested digit count must be at least 1.
    ZeroDigitCount,
    /// The operation is not defined for the value zero.
    ZeroValue,
    /// The exponent lies outside the normal double-precision range.
    ExponentOutOfRange { exponent: i32 },
    /// The value falls in the single-precision subnormal range, which the
    /// manual encoder does not cover.
    SubnormalRange,
    /// The input does not parse to a finite double.
    NonFinite,
}

impl fmt::Display for PreconditionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeSeed => write!(f, "seed must be zero or positive"),
            Self::EmptyInput => write!(f, "decimal input must not be empty"),
            Self::ExponentialNotation => {
                write!(f, "exponential notation is not supported")
            }
            Self::InvalidDecimal { position, found } => {
                write!(f, "invalid character {found:?} at position {position} in decimal input")
            }
            Self::ZeroDigitCount => write!(f, "digit count must be at least 1"),
            Self::ZeroValue => write!(f, "operation is not defined for zero"),
            Self::ExponentOutOfRange { exponent } => {
                write!(f, "exponent {exponent} is outside the normal range [-1022, 1023]")
            }
            Self::SubnormalRange => {
                write!(f, "value is below the single-precision normal range")
            }
            Self::NonFinite => write!(f, "input does not parse to a finite double"),
        }
    }
}

impl std::error::Error for PreconditionError {}

/// Aggregate error for operations that can fail in more than one way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FpError {
    Format(FormatError),
    Special(SpecialValueError),
    Overflow(OverflowError),
    Precondition(PreconditionError),
}

impl fmt::Display for FpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(err) => write!(f, "{err}"),
            Self::Special(err) => write!(f, "{err}"),
            Self::Overflow(err) => write!(f, "{err}"),
            Self::Precondition(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for FpError {}

impl From<FormatError> for FpError {
    fn from(error: FormatError) -> Self {
        Self::Format(error)
    }
}

impl From<SpecialValueError> for FpError {
    fn from(error: SpecialValueError) -> Self {
        Self::Special(error)
    }
}

impl From<OverflowError> for FpError {
    fn from(error: OverflowError) -> Self {
        Self::Overflow(error)
    }
}

impl From<PreconditionError> for FpError {
    fn from(error: PreconditionError) -> Self {
        Self::Precondition(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_error_display() {
        assert_eq!(
            FormatError::Length { expected: 64, actual: 10 }.to_string(),
            "bit string must have 64 characters, got 10"
        );
        assert_eq!(
            FormatError::InvalidBit { position: 3, found: 'x' }.to_string(),
            "invalid bit 'x' at position 3"
        );
    }

    #[test]
    fn special_value_error_display() {
        assert_eq!(SpecialValueError::Infinity.to_string(), "bit pattern encodes Infinity");
        assert_eq!(SpecialValueError::Nan.to_string(), "bit pattern encodes NaN");
    }

    #[test]
    fn overflow_error_display() {
        assert_eq!(
            OverflowError::Increment.to_string(),
            "increment overflowed the available bit width"
        );
        assert_eq!(
            OverflowError::Decrement.to_string(),
            "decrement underflowed the available bit width"
        );
    }

    #[test]
    fn precondition_error_display() {
        assert_eq!(
            PreconditionError::ExponentOutOfRange { exponent: 1024 }.to_string(),
            "exponent 1024 is outside the normal range [-1022, 1023]"
        );
    }

    #[test]
    fn errors_convert_to_fp_error() {
        let special: FpError = SpecialValueError::Infinity.into();
        assert!(matches!(special, FpError::Special(SpecialValueError::Infinity)));

        let overflow: FpError = OverflowError::Increment.into();
        assert!(matches!(overflow, FpError::Overflow(OverflowError::Increment)));

        let precondition: FpError = PreconditionError::NegativeSeed.into();
        assert!(matches!(
            precondition,
            FpError::Precondition(PreconditionError::NegativeSeed)
        ));
    }
}
