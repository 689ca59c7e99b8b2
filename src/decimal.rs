//! Exact scaled-integer decimal arithmetic.
//!
//! `Decimal` represents `digits * 10^scale` exactly. Every value a
//! double-precision float can take is a dyadic rational, so its decimal
//! expansion terminates and this representation is lossless; there is no
//! precision context to configure.

mod decimal_impl;
mod display;
mod parse;

pub use decimal_impl::Decimal;
pub use parse::DecimalError;

pub(crate) use display::plain_string;
