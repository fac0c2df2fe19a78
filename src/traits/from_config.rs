//! Generic construction trait for building state from configuration.
//!
//! [`FromConfig`] provides a uniform interface for creating simulator state
//! from the blueprints in [`config`](crate::config).  Each state type
//! implements `FromConfig<C>` for its own configuration struct.
//!
//! # Validation Contract
//!
//! Implementations **must** validate all configuration invariants during
//! construction.  A successfully constructed value is guaranteed to be in a
//! valid initial state — positive reserves, non-negative balances, and a
//! consistent invariant.
//!
//! There is no blanket implementation: every state/config pairing is
//! explicit, keeping validation logic specific to the type it protects.

use crate::error::SimError;

/// Generic construction trait for building a state value from a
/// configuration.
///
/// # Type Parameters
///
/// - `C` — the configuration type that fully describes the value's initial
///   state.
///
/// # Implementors
///
/// - `impl FromConfig<PoolConfig> for PoolState`
/// - `impl FromConfig<WalletConfig> for UserWallet`
/// - `impl FromConfig<SimulatorConfig> for SwapSession`
pub trait FromConfig<C> {
    /// Creates a new instance from the given configuration.
    ///
    /// The configuration is taken by reference because sessions retain it
    /// for later resets.
    ///
    /// # Errors
    ///
    /// Returns a [`SimError`] if any configuration invariant is violated.
    fn from_config(config: &C) -> Result<Self, SimError>
    where
        Self: Sized;
}
