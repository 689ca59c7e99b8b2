//! Double-precision bit pattern codec.
//!
//! `BitPattern` holds the 64-bit IEEE-754 layout decomposed into its three
//! fields: sign, 11 exponent bits, and 52 fraction bits, each stored MSB
//! first. It is an immutable value type; every operation that "changes" a
//! pattern produces a new one.

use std::fmt;

use crate::error::FormatError;

/// Number of exponent bits in the double-precision layout.
pub const EXPONENT_BITS: usize = 11;
/// Number of fraction bits in the double-precision layout.
pub const FRACTION_BITS: usize = 52;
/// Total width of the double-precision layout.
pub const TOTAL_BITS: usize = 64;
/// Exponent bias of the double-precision layout.
pub const EXPONENT_BIAS: i32 = 1023;

/// Decomposed 64-bit IEEE-754 double-precision bit pattern.
///
/// Field order within the 64-bit word is sign, exponent, fraction, with the
/// most significant bit of each field first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitPattern {
    sign: bool,
    exponent: [bool; EXPONENT_BITS],
    fraction: [bool; FRACTION_BITS],
}

impl BitPattern {
    /// Builds a pattern from its three fields.
    pub fn from_fields(
        sign: bool,
        exponent: [bool; EXPONENT_BITS],
        fraction: [bool; FRACTION_BITS],
    ) -> Self {
        Self { sign, exponent, fraction }
    }

    /// Decomposes a native double into its bit pattern.
    pub fn from_f64(value: f64) -> Self {
        let bits = value.to_bits();
        let mut exponent = [false; EXPONENT_BITS];
        for (i, bit) in exponent.iter_mut().enumerate() {
            *bit = (bits >> (62 - i)) & 1 == 1;
        }
        let mut fraction = [false; FRACTION_BITS];
        for (i, bit) in fraction.iter_mut().enumerate() {
            *bit = (bits >> (51 - i)) & 1 == 1;
        }
        Self { sign: bits >> 63 == 1, exponent, fraction }
    }

    /// Parses a 64-character '0'/'1' string into a pattern.
    pub fn from_bit_str(input: &str) -> Result<Self, FormatError> {
        let actual = input.chars().count();
        if actual != TOTAL_BITS {
            return Err(FormatError::Length { expected: TOTAL_BITS, actual });
        }
        let mut bits = [false; TOTAL_BITS];
        for (position, found) in input.chars().enumerate() {
            bits[position] = match found {
                '0' => false,
                '1' => true,
                _ => return Err(FormatError::InvalidBit { position, found }),
            };
        }
        let mut exponent = [false; EXPONENT_BITS];
        exponent.copy_from_slice(&bits[1..1 + EXPONENT_BITS]);
        let mut fraction = [false; FRACTION_BITS];
        fraction.copy_from_slice(&bits[1 + EXPONENT_BITS..]);
        Ok(Self { sign: bits[0], exponent, fraction })
    }

    /// Returns the sign bit (true for negative).
    pub fn sign(&self) -> bool {
        self.sign
    }

    /// Returns the exponent bits, MSB first.
    pub fn exponent(&self) -> &[bool; EXPONENT_BITS] {
        &self.exponent
    }

    /// Returns the fraction bits, MSB first.
    pub fn fraction(&self) -> &[bool; FRACTION_BITS] {
        &self.fraction
    }

    /// Reassembles the unsigned 64-bit integer value of the pattern.
    pub fn to_bits(&self) -> u64 {
        let mut bits = (self.sign as u64) << 63;
        for (i, &bit) in self.exponent.iter().enumerate() {
            bits |= (bit as u64) << (62 - i);
        }
        for (i, &bit) in self.fraction.iter().enumerate() {
            bits |= (bit as u64) << (51 - i);
        }
        bits
    }

    /// Reconstructs the native double encoded by the pattern.
    pub fn to_f64(&self) -> f64 {
        f64::from_bits(self.to_bits())
    }

    /// Returns the biased exponent as an integer.
    pub fn biased_exponent(&self) -> u32 {
        self.exponent.iter().fold(0, |acc, &bit| (acc << 1) | bit as u32)
    }

    /// Returns the unbiased exponent.
    ///
    /// Only meaningful for normal patterns; subnormals and zero report the
    /// raw `0 - bias` value and are handled explicitly by their consumers.
    pub fn unbiased_exponent(&self) -> i32 {
        self.biased_exponent() as i32 - EXPONENT_BIAS
    }

    /// Returns the fraction field as an unsigned integer.
    pub fn fraction_value(&self) -> u64 {
        self.fraction.iter().fold(0, |acc, &bit| (acc << 1) | bit as u64)
    }

    /// Renders the 64-character binary string, MSB first.
    pub fn bit_string(&self) -> String {
        format!("{:064b}", self.to_bits())
    }

    /// Renders the lowercase hexadecimal form of the 64-bit value, with
    /// leading zero nibbles dropped.
    pub fn hex_string(&self) -> String {
        format!("{:#x}", self.to_bits())
    }
}

impl fmt::Display for BitPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bit_string())
    }
}
