//! Enumeration of d-digit decimals mapping onto one double.
//!
//! Many different decimal literals parse to the same binary value; this
//! module enumerates all of them at a fixed digit count, which is how one
//! reasons about precision loss at the decimal/binary boundary.

use num_bigint::BigInt;
use num_traits::One;

use crate::decimal::Decimal;
use crate::error::{FpError, PreconditionError};
use crate::exact::to_exact;
use crate::pattern::BitPattern;

/// The set of `digit_count`-digit decimals that parse to one double.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecimalToFloatMapping {
    count: usize,
    increment: Decimal,
    numbers: Vec<Decimal>,
}

impl DecimalToFloatMapping {
    /// Number of enumerated decimals.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Spacing of the enumerated grid, `10^(scale + len - d)`.
    pub fn increment(&self) -> &Decimal {
        &self.increment
    }

    /// The enumerated decimals in strictly ascending order.
    pub fn numbers(&self) -> &[Decimal] {
        &self.numbers
    }
}

/// Enumerates every `digit_count`-digit decimal that native parsing rounds
/// to `value`.
///
/// Starting from the floor truncation of the exact decimal, walks the
/// `10^(scale + len - d)` grid downward and upward while reparsing still
/// yields `value`, and returns the ascending union. Specials surface as
/// `SpecialValueError`; zero and a zero digit count are preconditions.
pub fn map_ndigit_decimals(
    value: f64,
    digit_count: usize,
) -> Result<DecimalToFloatMapping, FpError> {
    if digit_count == 0 {
        return Err(PreconditionError::ZeroDigitCount.into());
    }
    let exact = to_exact(&BitPattern::from_f64(value))?;
    if exact.exact_decimal().is_zero() {
        return Err(PreconditionError::ZeroValue.into());
    }

    let magnitude = exact.exact_decimal().abs();
    let (digit_str, scale) = magnitude.normalized_parts();
    let unit_scale = scale + digit_str.len() as i64 - digit_count as i64;
    let increment = Decimal::pow10(unit_scale);
    let abs_bits = value.abs().to_bits();
    let reparses = |units: &BigInt| {
        Decimal::new(units.clone(), unit_scale).to_f64().to_bits() == abs_bits
    };

    let floor_units = magnitude.floor_units(unit_scale);
    let mut below = Vec::new();
    let mut down = floor_units.clone();
    while reparses(&down) {
        below.push(down.clone());
        down -= BigInt::one();
    }
    let mut numbers: Vec<Decimal> = below
        .into_iter()
        .rev()
        .map(|units| Decimal::new(units, unit_scale))
        .collect();
    let mut up = floor_units + BigInt::one();
    while reparses(&up) {
        numbers.push(Decimal::new(up.clone(), unit_scale));
        up += BigInt::one();
    }

    if value < 0.0 {
        numbers = numbers.into_iter().rev().map(|number| number.neg()).collect();
    }
    Ok(DecimalToFloatMapping { count: numbers.len(), increment, numbers })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use crate::error::SpecialValueError;
    use crate::test_utils::dec;

    use super::*;

    #[test]
    fn enumerates_seventeen_digit_decimals_of_an_integer_ulp16_value() {
        let value = 72057594037927968.0;
        let mapping = map_ndigit_decimals(value, 17).expect("mapping should succeed");
        assert_eq!(mapping.increment(), &dec("1"));
        assert_eq!(mapping.count(), 17);
        assert_eq!(mapping.numbers().first(), Some(&dec("72057594037927960")));
        assert_eq!(mapping.numbers().last(), Some(&dec("72057594037927976")));
        for pair in mapping.numbers().windows(2) {
            assert!(pair[0] < pair[1]);
        }
        for number in mapping.numbers() {
            assert_eq!(number.to_f64(), value);
        }
    }

    #[test]
    fn single_digit_grid_around_one_tenth() {
        let mapping = map_ndigit_decimals(0.1, 1).expect("mapping should succeed");
        assert_eq!(mapping.increment(), &dec("0.1"));
        assert_eq!(mapping.numbers(), &[dec("0.1")]);
        assert_eq!(mapping.count(), 1);
    }

    #[test]
    fn negative_values_mirror_the_positive_grid() {
        let positive = map_ndigit_decimals(0.1, 2).expect("mapping should succeed");
        let negative = map_ndigit_decimals(-0.1, 2).expect("mapping should succeed");
        assert_eq!(negative.count(), positive.count());
        let mirrored: Vec<_> =
            positive.numbers().iter().rev().map(|number| number.neg()).collect();
        assert_eq!(negative.numbers(), &mirrored[..]);
        for number in negative.numbers() {
            assert_eq!(number.to_f64(), -0.1);
        }
    }

    #[test]
    fn coarse_grids_may_be_empty() {
        // No 1-digit decimal parses to exactly 7.2.
        let mapping = map_ndigit_decimals(7.2, 1).expect("mapping should succeed");
        assert_eq!(mapping.count(), 0);
        assert!(mapping.numbers().is_empty());
    }

    #[test]
    fn preconditions_and_specials_are_rejected() {
        assert_eq!(
            map_ndigit_decimals(1.0, 0),
            Err(FpError::Precondition(PreconditionError::ZeroDigitCount))
        );
        assert_eq!(
            map_ndigit_decimals(0.0, 3),
            Err(FpError::Precondition(PreconditionError::ZeroValue))
        );
        assert_eq!(
            map_ndigit_decimals(f64::NAN, 3),
            Err(FpError::Special(SpecialValueError::Nan))
        );
        assert_eq!(
            map_ndigit_decimals(f64::INFINITY, 3),
            Err(FpError::Special(SpecialValueError::Infinity))
        );
    }
}
