//! Decimal text parsing.
//!
//! Accepts plain positional decimals only: an optional sign, digits, and at
//! most one decimal point. Exponential notation is rejected explicitly so
//! the caller can distinguish "unsupported" from "garbage".

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;

use crate::error::PreconditionError;

use super::decimal_impl::Decimal;

/// Errors raised while parsing decimal text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecimalError {
    /// The input is empty.
    Empty,
    /// The input uses exponential notation.
    ExponentialNotation,
    /// The input contains an unexpected character.
    InvalidCharacter { position: usize, found: char },
    /// The input contains no digits at all.
    MissingDigits,
}

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "decimal input is empty"),
            Self::ExponentialNotation => write!(f, "exponential notation is not supported"),
            Self::InvalidCharacter { position, found } => {
                write!(f, "unexpected character {found:?} at position {position}")
            }
            Self::MissingDigits => write!(f, "decimal input contains no digits"),
        }
    }
}

impl std::error::Error for DecimalError {}

impl From<DecimalError> for PreconditionError {
    fn from(error: DecimalError) -> Self {
        match error {
            DecimalError::Empty | DecimalError::MissingDigits => Self::EmptyInput,
            DecimalError::ExponentialNotation => Self::ExponentialNotation,
            DecimalError::InvalidCharacter { position, found } => {
                Self::InvalidDecimal { position, found }
            }
        }
    }
}

impl FromStr for Decimal {
    type Err = DecimalError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.is_empty() {
            return Err(DecimalError::Empty);
        }

        let mut digits = String::with_capacity(input.len());
        let mut negative = false;
        let mut seen_point = false;
        let mut fraction_digits: i64 = 0;

        for (position, found) in input.chars().enumerate() {
            match found {
                '+' | '-' if position == 0 => negative = found == '-',
                '0'..='9' => {
                    digits.push(found);
                    if seen_point {
                        fraction_digits += 1;
                    }
                }
                '.' if !seen_point => seen_point = true,
                'e' | 'E' => return Err(DecimalError::ExponentialNotation),
                _ => return Err(DecimalError::InvalidCharacter { position, found }),
            }
        }
        if digits.is_empty() {
            return Err(DecimalError::MissingDigits);
        }

        let mut magnitude = BigInt::parse_bytes(digits.as_bytes(), 10)
            .ok_or(DecimalError::MissingDigits)?;
        if negative {
            magnitude = -magnitude;
        }
        Ok(Decimal::new(magnitude, -fraction_digits))
    }
}
