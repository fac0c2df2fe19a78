//! Record of an executed swap.

use core::fmt;

use super::{Amount, PriceSnapshot, SwapDirection};
use crate::error::SimError;

/// The outcome of an executed swap: what was paid, what was received, and
/// the price snapshot the trade produced.
///
/// # Invariants
///
/// - `amount_in > 0` — a zero-input trade is never executed.
/// - `amount_out` carries the canonical 6-decimal rounding; it is the exact
///   number the preceding quote displayed, and the exact number credited to
///   the wallet.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapReceipt {
    direction: SwapDirection,
    amount_in: Amount,
    amount_out: Amount,
    snapshot: PriceSnapshot,
}

impl SwapReceipt {
    /// Creates a new `SwapReceipt` with validated invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidAmount`] if `amount_in` is zero.
    pub fn new(
        direction: SwapDirection,
        amount_in: Amount,
        amount_out: Amount,
        snapshot: PriceSnapshot,
    ) -> crate::error::Result<Self> {
        if amount_in.is_zero() {
            return Err(SimError::InvalidAmount("amount_in must be positive"));
        }
        Ok(Self {
            direction,
            amount_in,
            amount_out,
            snapshot,
        })
    }

    /// Returns the direction the trade was executed in.
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Returns the input amount debited from the wallet.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output amount credited to the wallet.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the price snapshot appended to the history for this trade.
    pub const fn snapshot(&self) -> PriceSnapshot {
        self.snapshot
    }
}

impl fmt::Display for SwapReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapReceipt({}: in={}, out={})",
            self.direction, self.amount_in, self.amount_out
        )
    }
}
