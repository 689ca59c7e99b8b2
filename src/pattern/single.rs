//! Manual single-precision encoder.
//!
//! Builds the 32-bit IEEE-754 layout ([0:1] sign, [1:9] exponent with bias
//! 127, [9:32] fraction) from a native double by hand: normalize the
//! magnitude, extract fraction bits by repeated doubling, and round to 23
//! bits with ties-to-even. Special inputs map to their canonical patterns.

use crate::error::{OverflowError, PreconditionError};

use super::rounding::round_nearest_even;

/// Number of exponent bits in the single-precision layout.
const SINGLE_EXPONENT_BITS: usize = 8;
/// Number of fraction bits in the single-precision layout.
const SINGLE_FRACTION_BITS: usize = 23;
/// Exponent bias of the single-precision layout.
const SINGLE_EXPONENT_BIAS: i32 = 127;
/// Largest biased exponent of a normal single-precision value.
const SINGLE_MAX_BIASED: i32 = 254;

/// Encodes a value as its single-precision bit pattern, returned as a
/// 32-character binary string and its lowercase hex form.
///
/// Signed zero keeps its sign bit; infinities produce the all-ones-exponent
/// pattern and NaN the canonical quiet form (fraction LSB set). Values whose
/// magnitude rounds past the largest finite single become Infinity; values
/// below the single-precision normal range are rejected, since the manual
/// algorithm only covers normal outputs.
pub fn encode_single(value: f64) -> Result<(String, String), PreconditionError> {
    if value == 0.0 {
        let sign = if value.is_sign_negative() { '1' } else { '0' };
        return Ok(render(sign, 0, &[false; SINGLE_FRACTION_BITS]));
    }
    if value == f64::NEG_INFINITY {
        return Ok(render('1', SINGLE_MAX_BIASED + 1, &[false; SINGLE_FRACTION_BITS]));
    }
    if value == f64::INFINITY {
        return Ok(render('0', SINGLE_MAX_BIASED + 1, &[false; SINGLE_FRACTION_BITS]));
    }
    if value.is_nan() {
        let mut fraction = [false; SINGLE_FRACTION_BITS];
        fraction[SINGLE_FRACTION_BITS - 1] = true;
        return Ok(render('0', SINGLE_MAX_BIASED + 1, &fraction));
    }

    let sign = if value < 0.0 { '1' } else { '0' };
    let mut fraction = value.abs();
    let mut exponent = SINGLE_EXPONENT_BIAS;

    // Normalize the magnitude into [1, 2). Halving and doubling are exact in
    // binary floating point, so no precision is lost here.
    while fraction >= 2.0 {
        fraction /= 2.0;
        exponent += 1;
    }
    while fraction < 1.0 {
        fraction *= 2.0;
        exponent -= 1;
    }
    if exponent > SINGLE_MAX_BIASED {
        return Ok(render(sign, SINGLE_MAX_BIASED + 1, &[false; SINGLE_FRACTION_BITS]));
    }
    if exponent <= 0 {
        return Err(PreconditionError::SubnormalRange);
    }

    // Drop the implicit leading 1, then peel off fraction bits by repeated
    // doubling: each doubling shifts the binary point right by one, so the
    // integer part is the next bit.
    fraction -= 1.0;
    let mut bits = Vec::with_capacity(SINGLE_FRACTION_BITS + 2);
    while fraction != 0.0 && bits.len() < SINGLE_FRACTION_BITS + 1 {
        fraction *= 2.0;
        let bit = fraction >= 1.0;
        bits.push(bit);
        if bit {
            fraction -= 1.0;
        }
    }
    // Anything left beyond the collected bits only matters as a sticky bit
    // for the tie decision.
    if fraction > 0.0 {
        bits.push(true);
    }

    let fraction_bits = match round_nearest_even(&bits, SINGLE_FRACTION_BITS) {
        Ok(rounded) => rounded,
        Err(OverflowError::Increment | OverflowError::Decrement) => {
            // The fraction wrapped to all zeros; the mantissa became 10.0...0.
            exponent += 1;
            if exponent > SINGLE_MAX_BIASED {
                return Ok(render(sign, SINGLE_MAX_BIASED + 1, &[false; SINGLE_FRACTION_BITS]));
            }
            Vec::new()
        }
    };

    let mut padded = [false; SINGLE_FRACTION_BITS];
    padded[..fraction_bits.len()].copy_from_slice(&fraction_bits);
    Ok(render(sign, exponent, &padded))
}

fn render(sign: char, biased_exponent: i32, fraction: &[bool; SINGLE_FRACTION_BITS]) -> (String, String) {
    let mut bits = String::with_capacity(1 + SINGLE_EXPONENT_BITS + SINGLE_FRACTION_BITS);
    bits.push(sign);
    for i in (0..SINGLE_EXPONENT_BITS).rev() {
        bits.push(if (biased_exponent >> i) & 1 == 1 { '1' } else { '0' });
    }
    for &bit in fraction {
        bits.push(if bit { '1' } else { '0' });
    }
    let value = bits.chars().fold(0u32, |acc, c| (acc << 1) | (c == '1') as u32);
    let hex = format!("{value:#x}");
    (bits, hex)
}
