//! Read-only trade projection against the current pool.

use crate::domain::{Amount, Percent, Quote, SwapDirection};
use crate::math::{curve_step, price_impact, round_amount, round_percent};
use crate::state::PoolState;

/// Fraction of the price impact reported as the slippage estimate.
///
/// A simplified educational proxy, not a real slippage model.
const SLIPPAGE_FACTOR: f64 = 0.5;

/// Projects the outcome of trading `input_amount` of the direction's input
/// token against the pool, without mutating anything.
///
/// Non-finite or non-positive input yields [`Quote::EMPTY`] — the
/// empty-input state of a swap form, not an error.  The function is pure
/// and cheap enough to call on every keystroke.
///
/// The executor prices trades through the same curve step, so executing a
/// quoted amount credits exactly the quoted output.
#[must_use]
pub fn quote(pool: &PoolState, direction: SwapDirection, input_amount: f64) -> Quote {
    if !input_amount.is_finite() || input_amount <= 0.0 {
        return Quote::EMPTY;
    }

    let (reserve_in, reserve_out) = pool.reserves_for(direction);
    let step = curve_step(
        reserve_in.get(),
        reserve_out.get(),
        pool.invariant_k(),
        input_amount,
    );
    let impact = price_impact(reserve_in.get(), reserve_out.get(), &step);

    let Ok(amount_out) = Amount::new(round_amount(step.amount_out())) else {
        return Quote::EMPTY;
    };
    // Slippage derives from the unrounded impact; both round independently.
    let Ok(slippage) = Percent::new(round_percent(impact * SLIPPAGE_FACTOR)) else {
        return Quote::EMPTY;
    };
    let Ok(impact) = Percent::new(round_percent(impact)) else {
        return Quote::EMPTY;
    };

    Quote::new(amount_out, impact, slippage)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::PoolConfig;
    use crate::traits::FromConfig;

    fn make_pool(ra: f64, rb: f64) -> PoolState {
        let Ok(cfg) = PoolConfig::new(ra, rb) else {
            panic!("valid config");
        };
        let Ok(pool) = PoolState::from_config(&cfg) else {
            panic!("valid pool");
        };
        pool
    }

    // -- Invalid input --------------------------------------------------------

    #[test]
    fn zero_input_is_empty() {
        let pool = PoolState::default();
        assert!(quote(&pool, SwapDirection::AtoB, 0.0).is_empty());
    }

    #[test]
    fn negative_input_is_empty() {
        let pool = PoolState::default();
        assert!(quote(&pool, SwapDirection::AtoB, -10.0).is_empty());
    }

    #[test]
    fn nan_input_is_empty() {
        let pool = PoolState::default();
        assert!(quote(&pool, SwapDirection::AtoB, f64::NAN).is_empty());
    }

    #[test]
    fn infinite_input_is_empty() {
        let pool = PoolState::default();
        assert!(quote(&pool, SwapDirection::BtoA, f64::INFINITY).is_empty());
    }

    // -- Worked example -------------------------------------------------------

    #[test]
    fn balanced_pool_hundred_in() {
        let pool = PoolState::default();
        let q = quote(&pool, SwapDirection::AtoB, 100.0);
        // new_a = 1100, new_b = 909.090909…, out = 90.909091 (6 dp)
        assert!((q.amount_out().get() - 90.909_091).abs() < 1e-12);
        // impact = |(909.0909/1100) / 1 − 1| × 100 = 17.355… → 17.36
        assert!((q.price_impact().get() - 17.36).abs() < 1e-12);
        // slippage = impact / 2 → 8.68
        assert!((q.slippage().get() - 8.68).abs() < 1e-12);
    }

    #[test]
    fn direction_symmetric_on_balanced_pool() {
        let pool = PoolState::default();
        let ab = quote(&pool, SwapDirection::AtoB, 100.0);
        let ba = quote(&pool, SwapDirection::BtoA, 100.0);
        assert_eq!(ab, ba);
    }

    #[test]
    fn skewed_pool_uses_direction_reserves() {
        let pool = make_pool(1_000.0, 4_000.0);
        let ab = quote(&pool, SwapDirection::AtoB, 100.0);
        // out = 4000 − 4_000_000/1100 = 363.636364
        assert!((ab.amount_out().get() - 363.636_364).abs() < 1e-9);
        let ba = quote(&pool, SwapDirection::BtoA, 100.0);
        // out = 1000 − 4_000_000/4100 = 24.390244
        assert!((ba.amount_out().get() - 24.390_244).abs() < 1e-9);
    }

    // -- Shape ----------------------------------------------------------------

    #[test]
    fn quote_does_not_mutate_pool() {
        let pool = PoolState::default();
        let before = pool;
        let _ = quote(&pool, SwapDirection::AtoB, 500.0);
        assert_eq!(pool, before);
    }

    #[test]
    fn quote_is_deterministic() {
        let pool = PoolState::default();
        let a = quote(&pool, SwapDirection::AtoB, 123.456);
        let b = quote(&pool, SwapDirection::AtoB, 123.456);
        assert_eq!(a, b);
    }

    #[test]
    fn output_grows_with_input() {
        let pool = PoolState::default();
        let small = quote(&pool, SwapDirection::AtoB, 10.0);
        let large = quote(&pool, SwapDirection::AtoB, 500.0);
        assert!(large.amount_out() > small.amount_out());
        assert!(large.price_impact() > small.price_impact());
    }

    #[test]
    fn huge_input_approaches_reserve() {
        let pool = PoolState::default();
        let q = quote(&pool, SwapDirection::AtoB, 1e12);
        assert!(q.amount_out().get() < 1_000.0);
        assert!(q.amount_out().get() > 999.99);
    }

    #[test]
    fn slippage_is_half_impact() {
        let pool = PoolState::default();
        let q = quote(&pool, SwapDirection::AtoB, 250.0);
        // Both percentages round independently, so allow a whole rounding step.
        assert!((q.slippage().get() - q.price_impact().get() * 0.5).abs() < 0.01);
    }

    #[test]
    fn dust_input_rounds_to_zero_output() {
        let pool = PoolState::default();
        let q = quote(&pool, SwapDirection::AtoB, 1e-9);
        assert!(q.amount_out().is_zero());
    }
}
