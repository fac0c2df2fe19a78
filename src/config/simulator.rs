//! Combined configuration for a simulator session.

use super::{PoolConfig, WalletConfig};
use crate::error::SimError;

/// Full blueprint for a simulator session: pool reserves plus user
/// balances.
///
/// The session retains its configuration so that a reset rebuilds exactly
/// the same starting state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulatorConfig {
    pool: PoolConfig,
    wallet: WalletConfig,
}

impl SimulatorConfig {
    /// Creates a new `SimulatorConfig` from already-validated parts.
    pub const fn new(pool: PoolConfig, wallet: WalletConfig) -> Self {
        Self { pool, wallet }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    pub fn validate(&self) -> Result<(), SimError> {
        self.pool.validate()
    }

    /// Returns the pool blueprint.
    pub const fn pool(&self) -> &PoolConfig {
        &self.pool
    }

    /// Returns the wallet blueprint.
    pub const fn wallet(&self) -> &WalletConfig {
        &self.wallet
    }
}
