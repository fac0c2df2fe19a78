//! Configuration for the constant-product pool.

use crate::domain::Amount;
use crate::error::SimError;

/// Initial-state blueprint for a constant-product pool (`x · y = k`).
///
/// # Derived Values
///
/// - Invariant: `k = reserve_a × reserve_b`, fixed until the next reset.
/// - Initial price of token A in B terms: `reserve_b / reserve_a`.
///
/// # Validation
///
/// Both reserves must be finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    reserve_a: Amount,
    reserve_b: Amount,
}

impl PoolConfig {
    /// Default reserve for each side of the pool.
    pub const DEFAULT_RESERVE: f64 = 1_000.0;

    /// Creates a new `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidAmount`] if a reserve is non-finite or
    /// negative, or [`SimError::ZeroReserve`] if a reserve is zero.
    pub fn new(reserve_a: f64, reserve_b: f64) -> Result<Self, SimError> {
        let config = Self {
            reserve_a: Amount::new(reserve_a)?,
            reserve_b: Amount::new(reserve_b)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ZeroReserve`] if either reserve is zero.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.reserve_a.is_zero() {
            return Err(SimError::ZeroReserve);
        }
        if self.reserve_b.is_zero() {
            return Err(SimError::ZeroReserve);
        }
        Ok(())
    }

    /// Returns the initial reserve of token A.
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Returns the initial reserve of token B.
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Returns the invariant this configuration yields:
    /// `reserve_a × reserve_b`.
    #[must_use]
    pub fn invariant_k(&self) -> f64 {
        self.reserve_a.get() * self.reserve_b.get()
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            reserve_a: Amount::from_raw(Self::DEFAULT_RESERVE),
            reserve_b: Amount::from_raw(Self::DEFAULT_RESERVE),
        }
    }
}
