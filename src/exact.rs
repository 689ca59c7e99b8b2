//! Exact decimal conversion of bit patterns.
//!
//! A finite double is `±(implicit + fraction/2^52) * 2^e`; with exact
//! arithmetic that product has a terminating decimal expansion, so the value
//! here is the mathematically exact one, not the rounded rendering native
//! formatting produces.

use num_bigint::BigInt;
use num_traits::One;

use crate::decimal::Decimal;
use crate::error::SpecialValueError;
use crate::pattern::{check_special, BitPattern, EXPONENT_BIAS, FRACTION_BITS};

/// Smallest unbiased exponent of a normal double; subnormals share it.
const MIN_UNBIASED_EXPONENT: i32 = 1 - EXPONENT_BIAS;

/// A finite double decomposed into its exact decimal value.
///
/// `PartialEq` only: the native approximation field keeps `f64` comparison
/// semantics, so the type has no total equality.
#[derive(Clone, Debug, PartialEq)]
pub struct ExactValue {
    sign: i32,
    exact_decimal: Decimal,
    unbiased_exponent: i32,
    native_approximation: f64,
}

impl ExactValue {
    /// Returns +1 or -1.
    pub fn sign(&self) -> i32 {
        self.sign
    }

    /// Returns the exact decimal value.
    pub fn exact_decimal(&self) -> &Decimal {
        &self.exact_decimal
    }

    /// Returns the unbiased exponent of the binary form.
    pub fn unbiased_exponent(&self) -> i32 {
        self.unbiased_exponent
    }

    /// Returns the double this value was derived from.
    pub fn native_approximation(&self) -> f64 {
        self.native_approximation
    }
}

/// Converts a bit pattern to its exact decimal value and unbiased exponent.
///
/// The special-value check runs first; arithmetic is never attempted on
/// Infinity/NaN patterns. A biased exponent of zero is handled explicitly:
/// the implicit leading bit becomes 0 and the exponent is pinned at the
/// minimum, so signed zero yields exact 0 and subnormals yield
/// `fraction * 2^-1074`.
pub fn to_exact(pattern: &BitPattern) -> Result<ExactValue, SpecialValueError> {
    check_special(pattern)?;

    let biased = pattern.biased_exponent();
    let fraction = BigInt::from(pattern.fraction_value());
    let (mantissa, unbiased) = if biased == 0 {
        (fraction, MIN_UNBIASED_EXPONENT)
    } else {
        (fraction + (BigInt::one() << FRACTION_BITS), pattern.unbiased_exponent())
    };

    let magnitude = Decimal::from_dyadic(mantissa, unbiased as i64 - FRACTION_BITS as i64);
    let (sign, exact_decimal) = if pattern.sign() {
        (-1, magnitude.neg())
    } else {
        (1, magnitude)
    };

    Ok(ExactValue {
        sign,
        exact_decimal,
        unbiased_exponent: unbiased,
        native_approximation: pattern.to_f64(),
    })
}
