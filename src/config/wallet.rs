//! Configuration for the simulated user's wallet.

use crate::domain::Amount;
use crate::error::SimError;

/// Initial-state blueprint for the user's token balances.
///
/// Zero balances are allowed (the user simply cannot trade that side);
/// negative or non-finite balances are not.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalletConfig {
    balance_a: Amount,
    balance_b: Amount,
}

impl WalletConfig {
    /// Default starting balance for each token.
    pub const DEFAULT_BALANCE: f64 = 10_000.0;

    /// Creates a new `WalletConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidAmount`] if a balance is non-finite or
    /// negative.
    pub fn new(balance_a: f64, balance_b: f64) -> Result<Self, SimError> {
        Ok(Self {
            balance_a: Amount::new(balance_a)?,
            balance_b: Amount::new(balance_b)?,
        })
    }

    /// Returns the initial balance of token A.
    pub const fn balance_a(&self) -> Amount {
        self.balance_a
    }

    /// Returns the initial balance of token B.
    pub const fn balance_b(&self) -> Amount {
        self.balance_b
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            balance_a: Amount::from_raw(Self::DEFAULT_BALANCE),
            balance_b: Amount::from_raw(Self::DEFAULT_BALANCE),
        }
    }
}
