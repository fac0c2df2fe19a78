//! The simulated user's token balances.

use core::fmt;

use crate::config::WalletConfig;
use crate::domain::{Amount, SwapDirection};
use crate::error::SimError;
use crate::traits::FromConfig;

/// The trader's balances of both tokens.
///
/// Balances never go negative: a trade that would overdraw the input token
/// is rejected with [`SimError::InsufficientBalance`], never clamped.
/// Mutation happens only through the swap executor, in lockstep with the
/// pool reserves.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserWallet {
    balance_a: Amount,
    balance_b: Amount,
}

impl UserWallet {
    /// Returns the balance of token A.
    pub const fn balance_a(&self) -> Amount {
        self.balance_a
    }

    /// Returns the balance of token B.
    pub const fn balance_b(&self) -> Amount {
        self.balance_b
    }

    /// Returns the balance of the input token for the given direction.
    #[must_use]
    pub fn balance_of_input(&self, direction: SwapDirection) -> Amount {
        if direction.is_a_to_b() {
            self.balance_a
        } else {
            self.balance_b
        }
    }

    /// Returns `true` if the input-token balance covers `amount`.
    #[must_use]
    pub fn can_cover(&self, direction: SwapDirection, amount: Amount) -> bool {
        amount <= self.balance_of_input(direction)
    }

    /// Debits the input token and credits the output token atomically.
    ///
    /// Both new balances are computed before either is stored, so a failure
    /// leaves the wallet untouched.
    ///
    /// # Errors
    ///
    /// - [`SimError::InsufficientBalance`] if `debit` exceeds the input
    ///   balance.
    /// - [`SimError::InvalidAmount`] if the credited balance overflows.
    pub(crate) fn apply_trade(
        &mut self,
        direction: SwapDirection,
        debit: Amount,
        credit: Amount,
    ) -> Result<(), SimError> {
        if !self.can_cover(direction, debit) {
            return Err(SimError::InsufficientBalance);
        }
        let (input_balance, output_balance) = if direction.is_a_to_b() {
            (self.balance_a, self.balance_b)
        } else {
            (self.balance_b, self.balance_a)
        };
        let new_input = input_balance.checked_sub(&debit)?;
        let new_output = output_balance.checked_add(&credit)?;
        if direction.is_a_to_b() {
            self.balance_a = new_input;
            self.balance_b = new_output;
        } else {
            self.balance_b = new_input;
            self.balance_a = new_output;
        }
        Ok(())
    }
}

impl FromConfig<WalletConfig> for UserWallet {
    fn from_config(config: &WalletConfig) -> Result<Self, SimError> {
        Ok(Self {
            balance_a: config.balance_a(),
            balance_b: config.balance_b(),
        })
    }
}

impl Default for UserWallet {
    fn default() -> Self {
        let config = WalletConfig::default();
        Self {
            balance_a: config.balance_a(),
            balance_b: config.balance_b(),
        }
    }
}

impl fmt::Display for UserWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wallet(a={}, b={})", self.balance_a, self.balance_b)
    }
}
