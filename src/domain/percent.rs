//! Percentage value with canonical 2-decimal rounding.

use core::fmt;

use crate::error::SimError;
use crate::math::round_percent;

/// A non-negative percentage, used for price impact, slippage, and
/// price-change readouts.
///
/// Display rounds to the canonical 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct Percent(f64);

impl Percent {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Percent`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidAmount`] if `value` is negative, NaN, or
    /// infinite.
    pub fn new(value: f64) -> crate::error::Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(SimError::InvalidAmount(
                "percentage must be finite and non-negative",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the underlying `f64` value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Returns `true` if the percentage is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Rounds to the canonical 2-decimal display precision.
    pub fn rounded(&self) -> Self {
        Self(round_percent(self.0))
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
