//! Bit-level layer: IEEE-754 pattern codec, special-value check, stepping,
//! and round-to-nearest-even.

mod double;
mod increment;
mod rounding;
mod single;
mod special;
mod step;

pub use double::{BitPattern, EXPONENT_BIAS, EXPONENT_BITS, FRACTION_BITS, TOTAL_BITS};
pub use rounding::round_nearest_even;
pub use single::encode_single;
pub use special::check_special;
pub use step::{next, previous};

pub(crate) use special::is_zero_or_subnormal;
