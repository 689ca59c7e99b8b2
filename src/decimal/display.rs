//! Plain-decimal rendering.
//!
//! All output is positional ("0.001", never "1e-3"), matching the input
//! grammar accepted by the parser. Rendering to a fixed number of
//! significant digits keeps trailing zeros, which is what the round-trip
//! verification compares verbatim.

use std::fmt;

use super::decimal_impl::Decimal;

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let (digit_str, scale) = self.normalized_parts();
        write!(f, "{}", plain_string(self.is_negative(), &digit_str, scale))
    }
}

impl Decimal {
    /// Renders the value rounded (half-to-even) to exactly `count`
    /// significant digits, trailing zeros included.
    pub fn to_significant_string(&self, count: usize) -> String {
        let rounded = self.round_significant(count);
        if rounded.is_zero() {
            return "0".to_string();
        }
        let (digit_str, scale) = rounded.normalized_parts();
        let pad = count.saturating_sub(digit_str.len());
        let mut padded = digit_str;
        padded.push_str(&"0".repeat(pad));
        plain_string(rounded.is_negative(), &padded, scale - pad as i64)
    }
}

/// Positions `digit_str * 10^scale` around a decimal point.
pub(crate) fn plain_string(negative: bool, digit_str: &str, scale: i64) -> String {
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    if scale >= 0 {
        out.push_str(digit_str);
        out.push_str(&"0".repeat(scale as usize));
        return out;
    }
    let point = digit_str.len() as i64 + scale;
    if point > 0 {
        let (integral, fractional) = digit_str.split_at(point as usize);
        out.push_str(integral);
        out.push('.');
        out.push_str(fractional);
    } else {
        out.push_str("0.");
        out.push_str(&"0".repeat((-point) as usize));
        out.push_str(digit_str);
    }
    out
}

#[cfg(test)]
mod tests {
    use crate::test_utils::dec;

    use super::super::decimal_impl::Decimal;

    #[test]
    fn displays_plain_decimal_forms() {
        assert_eq!(dec("0").to_string(), "0");
        assert_eq!(dec("1200").to_string(), "1200");
        assert_eq!(dec("-12.5").to_string(), "-12.5");
        assert_eq!(dec("0.001234").to_string(), "0.001234");
        assert_eq!(dec("-0.25").to_string(), "-0.25");
    }

    #[test]
    fn display_never_uses_exponential_notation() {
        let tiny = Decimal::pow2(-1074);
        let text = tiny.to_string();
        assert!(text.starts_with("0.000"));
        assert!(!text.contains('e') && !text.contains('E'));
    }

    #[test]
    fn significant_rendering_keeps_trailing_zeros() {
        assert_eq!(dec("7.1").to_significant_string(16), "7.100000000000000");
        assert_eq!(dec("72057594037927952").to_significant_string(16), "72057594037927950");
        assert_eq!(dec("72057594037927952").to_significant_string(17), "72057594037927952");
    }

    #[test]
    fn significant_rendering_handles_carry() {
        assert_eq!(dec("9.99").to_significant_string(2), "10");
        assert_eq!(dec("0.999").to_significant_string(2), "1.0");
    }

    #[test]
    fn significant_rendering_of_negative_values() {
        assert_eq!(dec("-1.25").to_significant_string(2), "-1.2");
    }
}
