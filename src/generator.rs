//! Ascending representable-value cursor.
//!
//! An explicit pull-based cursor over the positive doubles: seeded at a
//! value's bit pattern, each `advance` yields the exact decimal of the
//! current pattern and moves to the successor. Restartable only by
//! constructing a new cursor from a seed; after the first error the cursor
//! is terminal and keeps reporting that error. Negative values are not
//! generated (obtainable by symmetry).

use crate::error::{FpError, PreconditionError};
use crate::exact::{to_exact, ExactValue};
use crate::pattern::{next, BitPattern};

enum State {
    Ready(BitPattern),
    Exhausted(FpError),
}

/// Cursor over representable values in ascending order.
pub struct AscendingValues {
    state: State,
}

impl AscendingValues {
    /// Seeds the cursor at the bit pattern of `seed`, which must be zero or
    /// positive (and not NaN). The first `advance` yields the seed's own
    /// exact value.
    pub fn from_seed(seed: f64) -> Result<Self, PreconditionError> {
        if seed.is_nan() || seed < 0.0 {
            return Err(PreconditionError::NegativeSeed);
        }
        Ok(Self { state: State::Ready(BitPattern::from_f64(seed)) })
    }

    /// Yields the current exact value and steps to the successor.
    ///
    /// Any failure (the current pattern is special, or stepping left the
    /// finite range) is terminal: the same error is returned on every later
    /// call, and the cursor never advances past it.
    pub fn advance(&mut self) -> Result<ExactValue, FpError> {
        let pattern = match &self.state {
            State::Ready(pattern) => *pattern,
            State::Exhausted(error) => return Err(error.clone()),
        };

        let value = match to_exact(&pattern) {
            Ok(value) => value,
            Err(error) => {
                self.state = State::Exhausted(error.into());
                return Err(error.into());
            }
        };
        // The error from stepping surfaces on the *next* call, after the
        // last finite value has been handed out.
        match next(&pattern) {
            Ok(stepped) => self.state = State::Ready(stepped),
            Err(error) => self.state = State::Exhausted(error),
        }
        Ok(value)
    }
}
