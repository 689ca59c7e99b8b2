//! Bit-sequence increment and decrement.
//!
//! The one carry/borrow primitive shared by the stepper and the rounder:
//! both treat a bit slice (MSB first) as an unsigned binary integer.

/// Adds 1 to the bit sequence in place.
///
/// Scans from the LSB, flipping trailing 1s to 0 and setting the first 0 to
/// 1. Returns true when the carry propagates past the most significant bit
/// (every bit was 1; the sequence is left all-zero).
pub fn increment_bits(bits: &mut [bool]) -> bool {
    for bit in bits.iter_mut().rev() {
        if *bit {
            *bit = false;
        } else {
            *bit = true;
            return false;
        }
    }
    true
}

/// Subtracts 1 from the bit sequence in place.
///
/// Mirror of [`increment_bits`]: flips trailing 0s to 1 and clears the first
/// 1. Returns true when the borrow propagates past the most significant bit
/// (every bit was 0; the sequence is left all-one).
pub fn decrement_bits(bits: &mut [bool]) -> bool {
    for bit in bits.iter_mut().rev() {
        if *bit {
            *bit = false;
            return false;
        }
        *bit = true;
    }
    true
}
