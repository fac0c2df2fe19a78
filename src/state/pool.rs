//! The constant-product pool state.

use core::fmt;

use crate::config::PoolConfig;
use crate::domain::{Amount, Price, PriceSnapshot, SwapDirection};
use crate::error::SimError;
use crate::traits::FromConfig;

/// A two-token constant-product pool (`x · y = k`).
///
/// # State
///
/// - `reserve_a` / `reserve_b` — the current reserves, always positive.
/// - `invariant_k` — the fixed product of the initial reserves.  It is
///   computed once at construction (and again on reset) and never updated
///   by a trade: the executor derives the post-trade reserves from `k`, so
///   the product is preserved analytically.
///
/// The only mutator of the reserves is the swap executor, via the
/// crate-private [`commit`](PoolState::commit).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolState {
    reserve_a: Amount,
    reserve_b: Amount,
    invariant_k: f64,
}

impl PoolState {
    /// Returns the current reserve of token A.
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Returns the current reserve of token B.
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Returns the fixed invariant `k`.
    #[must_use]
    pub const fn invariant_k(&self) -> f64 {
        self.invariant_k
    }

    /// Returns the reserves as `(input, output)` for the given direction.
    #[must_use]
    pub(crate) fn reserves_for(&self, direction: SwapDirection) -> (Amount, Amount) {
        if direction.is_a_to_b() {
            (self.reserve_a, self.reserve_b)
        } else {
            (self.reserve_b, self.reserve_a)
        }
    }

    /// Returns both spot prices derived from the current reserves.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::DivisionByZero`] if a reserve is zero, which a
    /// properly constructed pool never reaches.
    pub fn current_prices(&self) -> crate::error::Result<PriceSnapshot> {
        PriceSnapshot::from_reserves(self.reserve_a, self.reserve_b)
    }

    /// Returns the spot price of the input token in output-token terms for
    /// the given direction.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ZeroReserve`] if the input-side reserve is zero.
    pub fn spot_price(&self, direction: SwapDirection) -> crate::error::Result<Price> {
        let (reserve_in, reserve_out) = self.reserves_for(direction);
        if reserve_in.is_zero() {
            return Err(SimError::ZeroReserve);
        }
        Price::from_reserves(reserve_out, reserve_in)
    }

    /// Replaces the reserves after an executed trade.  `invariant_k` is
    /// deliberately left untouched.
    pub(crate) fn commit(
        &mut self,
        direction: SwapDirection,
        new_reserve_in: Amount,
        new_reserve_out: Amount,
    ) {
        if direction.is_a_to_b() {
            self.reserve_a = new_reserve_in;
            self.reserve_b = new_reserve_out;
        } else {
            self.reserve_b = new_reserve_in;
            self.reserve_a = new_reserve_out;
        }
    }
}

impl FromConfig<PoolConfig> for PoolState {
    /// Creates a new pool from the given configuration, computing the
    /// invariant `k = reserve_a × reserve_b`.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    fn from_config(config: &PoolConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            reserve_a: config.reserve_a(),
            reserve_b: config.reserve_b(),
            invariant_k: config.invariant_k(),
        })
    }
}

impl Default for PoolState {
    fn default() -> Self {
        let config = PoolConfig::default();
        Self {
            reserve_a: config.reserve_a(),
            reserve_b: config.reserve_b(),
            invariant_k: config.invariant_k(),
        }
    }
}

impl fmt::Display for PoolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pool(a={}, b={}, k={:.2})",
            self.reserve_a, self.reserve_b, self.invariant_k
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn make_pool(ra: f64, rb: f64) -> PoolState {
        let Ok(cfg) = PoolConfig::new(ra, rb) else {
            panic!("valid config");
        };
        let Ok(pool) = PoolState::from_config(&cfg) else {
            panic!("valid pool");
        };
        pool
    }

    fn amount(value: f64) -> Amount {
        let Ok(a) = Amount::new(value) else {
            panic!("valid amount");
        };
        a
    }

    // -- FromConfig -----------------------------------------------------------

    #[test]
    fn from_config_valid() {
        let pool = make_pool(1_000.0, 1_000.0);
        assert!((pool.reserve_a().get() - 1_000.0).abs() < f64::EPSILON);
        assert!((pool.reserve_b().get() - 1_000.0).abs() < f64::EPSILON);
        assert!((pool.invariant_k() - 1_000_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn from_config_invalid_rejected() {
        let cfg = PoolConfig::default();
        assert!(PoolState::from_config(&cfg).is_ok());
        // Zero reserves cannot even be built into a config.
        assert!(PoolConfig::new(0.0, 1.0).is_err());
    }

    #[test]
    fn default_matches_default_config() {
        let pool = PoolState::default();
        assert!((pool.invariant_k() - 1_000_000.0).abs() < f64::EPSILON);
    }

    // -- reserves_for ---------------------------------------------------------

    #[test]
    fn reserves_for_direction() {
        let pool = make_pool(1_000.0, 2_000.0);
        let (input, output) = pool.reserves_for(SwapDirection::AtoB);
        assert!((input.get() - 1_000.0).abs() < f64::EPSILON);
        assert!((output.get() - 2_000.0).abs() < f64::EPSILON);

        let (input, output) = pool.reserves_for(SwapDirection::BtoA);
        assert!((input.get() - 2_000.0).abs() < f64::EPSILON);
        assert!((output.get() - 1_000.0).abs() < f64::EPSILON);
    }

    // -- Prices ---------------------------------------------------------------

    #[test]
    fn current_prices_balanced() {
        let pool = make_pool(1_000.0, 1_000.0);
        let Ok(snap) = pool.current_prices() else {
            panic!("expected Ok");
        };
        assert_eq!(snap, PriceSnapshot::INITIAL);
    }

    #[test]
    fn spot_price_a_to_b() {
        let pool = make_pool(1_000.0, 2_000.0);
        let Ok(price) = pool.spot_price(SwapDirection::AtoB) else {
            panic!("expected Ok");
        };
        assert!((price.get() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn spot_price_b_to_a() {
        let pool = make_pool(1_000.0, 2_000.0);
        let Ok(price) = pool.spot_price(SwapDirection::BtoA) else {
            panic!("expected Ok");
        };
        assert!((price.get() - 0.5).abs() < 1e-12);
    }

    // -- commit ---------------------------------------------------------------

    #[test]
    fn commit_a_to_b_updates_reserves_keeps_k() {
        let mut pool = make_pool(1_000.0, 1_000.0);
        let k_before = pool.invariant_k();
        pool.commit(
            SwapDirection::AtoB,
            amount(1_100.0),
            amount(909.090_909_090_909_1),
        );
        assert!((pool.reserve_a().get() - 1_100.0).abs() < f64::EPSILON);
        assert!((pool.reserve_b().get() - 909.090_909_090_909_1).abs() < f64::EPSILON);
        assert!((pool.invariant_k() - k_before).abs() < f64::EPSILON);
    }

    #[test]
    fn commit_b_to_a_maps_sides() {
        let mut pool = make_pool(1_000.0, 1_000.0);
        pool.commit(
            SwapDirection::BtoA,
            amount(1_100.0),
            amount(909.090_909_090_909_1),
        );
        assert!((pool.reserve_b().get() - 1_100.0).abs() < f64::EPSILON);
        assert!((pool.reserve_a().get() - 909.090_909_090_909_1).abs() < f64::EPSILON);
    }

    // -- Display --------------------------------------------------------------

    #[test]
    fn display() {
        let pool = make_pool(1_000.0, 1_000.0);
        let s = format!("{pool}");
        assert!(s.contains("1000.000000"));
        assert!(s.contains("1000000.00"));
    }
}
