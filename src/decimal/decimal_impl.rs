//! Core exact decimal implementation.
//!
//! This module provides `Decimal`, an exact representation of terminating
//! decimal numbers as `digits * 10^scale` where the digits are normalized to
//! not be divisible by 10 (unless zero). The normalization ensures a
//! canonical representation for each value.

use std::cmp::Ordering;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Exact decimal number represented as `digits * 10^scale`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decimal {
    digits: BigInt,
    scale: i64,
}

impl Decimal {
    /// Creates a new Decimal, normalizing the representation.
    pub fn new(digits: BigInt, scale: i64) -> Self {
        Self::normalize(digits, scale)
    }

    /// Returns the zero value.
    pub fn zero() -> Self {
        Self { digits: BigInt::zero(), scale: 0 }
    }

    /// Returns a reference to the digits.
    pub fn digits(&self) -> &BigInt {
        &self.digits
    }

    /// Returns the power-of-ten scale.
    pub fn scale(&self) -> i64 {
        self.scale
    }

    /// Returns true if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.digits.is_zero()
    }

    /// Returns true if the value is negative.
    pub fn is_negative(&self) -> bool {
        self.digits.is_negative()
    }

    /// Returns the exact value of `2^exponent`.
    ///
    /// Negative powers of two terminate in decimal: `2^-n = 5^n * 10^-n`.
    pub fn pow2(exponent: i64) -> Self {
        if exponent >= 0 {
            Self::new(BigInt::one() << usize::try_from(exponent).unwrap_or(usize::MAX), 0)
        } else {
            let n = u32::try_from(-exponent).unwrap_or(u32::MAX);
            Self::new(BigInt::from(5).pow(n), exponent)
        }
    }

    /// Returns the exact value of `10^exponent`.
    pub fn pow10(exponent: i64) -> Self {
        Self { digits: BigInt::one(), scale: exponent }
    }

    /// Converts the exact dyadic rational `mantissa * 2^exponent`.
    ///
    /// This is the bridge from binary floating-point anatomy to decimal: the
    /// conversion is exact and always terminates.
    pub fn from_dyadic(mantissa: BigInt, exponent: i64) -> Self {
        if exponent >= 0 {
            Self::new(mantissa << usize::try_from(exponent).unwrap_or(usize::MAX), 0)
        } else {
            let n = u32::try_from(-exponent).unwrap_or(u32::MAX);
            Self::new(mantissa * BigInt::from(5).pow(n), exponent)
        }
    }

    /// Adds two Decimals exactly.
    pub fn add(&self, other: &Self) -> Self {
        let (lhs, rhs, scale) = Self::align_digits(self, other);
        Self::normalize(lhs + rhs, scale)
    }

    /// Subtracts another Decimal from this one exactly.
    pub fn sub(&self, other: &Self) -> Self {
        let (lhs, rhs, scale) = Self::align_digits(self, other);
        Self::normalize(lhs - rhs, scale)
    }

    /// Negates this Decimal.
    pub fn neg(&self) -> Self {
        if self.digits.is_zero() {
            return self.clone();
        }
        Self { digits: -self.digits.clone(), scale: self.scale }
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> Self {
        if self.digits.is_negative() {
            self.neg()
        } else {
            self.clone()
        }
    }

    /// Multiplies two Decimals exactly.
    pub fn mul(&self, other: &Self) -> Self {
        Self::normalize(&self.digits * &other.digits, self.scale + other.scale)
    }

    /// Number of significant decimal digits (1 for zero).
    pub fn significant_digits(&self) -> usize {
        if self.digits.is_zero() {
            return 1;
        }
        self.digits.magnitude().to_str_radix(10).len()
    }

    /// Rounds to at most `count` significant digits with round-half-to-even.
    ///
    /// Values that already fit in `count` digits are returned unchanged.
    pub fn round_significant(&self, count: usize) -> Self {
        let length = self.significant_digits();
        if self.digits.is_zero() || length <= count {
            return self.clone();
        }
        let drop = length - count;
        let divisor = BigUint::from(10u32).pow(u32::try_from(drop).unwrap_or(u32::MAX));
        let (mut quotient, remainder) = self.digits.magnitude().div_rem(&divisor);
        let doubled = &remainder * 2u32;
        let round_up = match doubled.cmp(&divisor) {
            Ordering::Greater => true,
            Ordering::Equal => quotient.is_odd(),
            Ordering::Less => false,
        };
        if round_up {
            quotient += 1u32;
        }
        let signed = BigInt::from_biguint(self.digits.sign(), quotient);
        Self::normalize(signed, self.scale + drop as i64)
    }

    /// Converts to the nearest native double via decimal text parsing, which
    /// applies the platform's correctly-rounded conversion.
    // TODO: Investigate parsing digits/scale directly once a correctly-rounded
    // integer-based conversion is worth the extra code.
    #[allow(clippy::unreachable)]
    pub fn to_f64(&self) -> f64 {
        self.to_string()
            .parse()
            .unwrap_or_else(|_| unreachable!("plain decimal rendering always reparses"))
    }

    /// Normalizes by factoring powers of 10 out of the digits.
    fn normalize(mut digits: BigInt, mut scale: i64) -> Self {
        if digits.is_zero() {
            return Self { digits, scale: 0 };
        }
        let ten = BigInt::from(10);
        loop {
            let (quotient, remainder) = digits.div_rem(&ten);
            if !remainder.is_zero() {
                break;
            }
            digits = quotient;
            scale += 1;
        }
        Self { digits, scale }
    }

    /// Aligns the digits of two Decimals to a common scale.
    fn align_digits(lhs: &Self, rhs: &Self) -> (BigInt, BigInt, i64) {
        let scale = lhs.scale.min(rhs.scale);
        let lhs_digits = Self::shift_digits(&lhs.digits, lhs.scale - scale);
        let rhs_digits = Self::shift_digits(&rhs.digits, rhs.scale - scale);
        (lhs_digits, rhs_digits, scale)
    }

    /// Shifts digits left by `shift` decimal places.
    fn shift_digits(digits: &BigInt, shift: i64) -> BigInt {
        if shift == 0 || digits.is_zero() {
            return digits.clone();
        }
        digits * BigInt::from(10).pow(u32::try_from(shift).unwrap_or(u32::MAX))
    }

    /// Compares values with potentially different scales without materializing
    /// huge alignment products when the magnitudes already decide the order.
    fn cmp_value(&self, other: &Self) -> Ordering {
        let sign_order = self.digits.sign().cmp(&other.digits.sign());
        if sign_order != Ordering::Equal {
            return sign_order;
        }
        if self.digits.is_zero() {
            return Ordering::Equal;
        }
        let negative = self.digits.is_negative();

        // Position of the leading digit: |value| lies in [10^(p-1), 10^p).
        let self_position = self.scale + self.significant_digits() as i64;
        let other_position = other.scale + other.significant_digits() as i64;
        let magnitude_order = match self_position.cmp(&other_position) {
            Ordering::Equal => {
                let (lhs, rhs, _) = Self::align_digits(&self.abs(), &other.abs());
                lhs.cmp(&rhs)
            }
            order => order,
        };
        if negative {
            magnitude_order.reverse()
        } else {
            magnitude_order
        }
    }

    /// Scientific decomposition: the digit magnitude as a string (no sign,
    /// no trailing zeros) together with the scale, so that
    /// `value = ±0.<digits> * 10^(scale + digits.len())`.
    pub fn normalized_parts(&self) -> (String, i64) {
        (self.digits.magnitude().to_str_radix(10), self.scale)
    }

    /// Truncates toward zero to an integer multiple of `10^unit_scale`,
    /// returning the multiplier.
    pub fn floor_units(&self, unit_scale: i64) -> BigInt {
        if self.digits.is_zero() {
            return BigInt::zero();
        }
        let shift = self.scale - unit_scale;
        if shift >= 0 {
            Self::shift_digits(&self.digits, shift)
        } else {
            let divisor = BigInt::from(10).pow(u32::try_from(-shift).unwrap_or(u32::MAX));
            self.digits.div_rem(&divisor).0
        }
    }
}

impl Add for Decimal {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Decimal::add(&self, &rhs)
    }
}

impl Sub for Decimal {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Decimal::sub(&self, &rhs)
    }
}

impl Neg for Decimal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Decimal::neg(&self)
    }
}

impl Mul for Decimal {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Decimal::mul(&self, &rhs)
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_value(other)
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
