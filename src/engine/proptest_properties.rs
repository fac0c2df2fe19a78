//! Property-based tests using `proptest` for the simulator's invariants.
//!
//! Covered properties:
//!
//! 1. **Invariant preservation** — `reserve_a × reserve_b` stays within
//!    1e-6 relative of `k` after any valid swap.
//! 2. **Quote/execute agreement** — the executed output equals the quoted
//!    output for the same arguments.
//! 3. **Monotonicity** — raw output and raw impact grow strictly with the
//!    input amount.
//! 4. **Swap reversibility** — a single trade executes strictly worse than
//!    the spot price (the loss to impact), and a round trip A→B→A never
//!    yields more than the original amount beyond the credit-rounding
//!    granularity (the fee-less curve itself is value-neutral).
//! 5. **Insufficient balance** — an overdrawing trade mutates nothing.
//! 6. **Reset idempotence** — resetting twice equals resetting once.

use proptest::prelude::*;

use crate::config::{PoolConfig, SimulatorConfig, WalletConfig};
use crate::domain::SwapDirection;
use crate::engine::{execute, quote};
use crate::math::{curve_step, price_impact};
use crate::session::SwapSession;
use crate::state::{HistoryLog, PoolState, UserWallet};
use crate::traits::FromConfig;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn make_pool(ra: f64, rb: f64) -> PoolState {
    let Ok(cfg) = PoolConfig::new(ra, rb) else {
        panic!("valid pool config");
    };
    let Ok(pool) = PoolState::from_config(&cfg) else {
        panic!("valid pool");
    };
    pool
}

fn make_wallet(a: f64, b: f64) -> UserWallet {
    let Ok(cfg) = WalletConfig::new(a, b) else {
        panic!("valid wallet config");
    };
    let Ok(wallet) = UserWallet::from_config(&cfg) else {
        panic!("valid wallet");
    };
    wallet
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in [100, 10_000_000] to avoid degenerate pools.
fn reserve_strategy() -> impl Strategy<Value = f64> {
    (100u64..=10_000_000u64).prop_map(|v| v as f64)
}

/// Swap amounts in [0.01, 100_000] with two decimal places of variety.
fn amount_strategy() -> impl Strategy<Value = f64> {
    (1u64..=10_000_000u64).prop_map(|v| v as f64 / 100.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // -- Property 1: invariant preservation ---------------------------------

    #[test]
    fn prop_invariant_preserved(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount in amount_strategy(),
    ) {
        let mut pool = make_pool(ra, rb);
        let mut wallet = make_wallet(1e12, 1e12);
        let mut history = HistoryLog::new();
        let k = pool.invariant_k();

        let Ok(_) = execute(&mut pool, &mut wallet, &mut history, SwapDirection::AtoB, amount)
        else {
            return Ok(());
        };

        let product = pool.reserve_a().get() * pool.reserve_b().get();
        prop_assert!(
            (product - k).abs() / k < 1e-6,
            "product {} drifted from k {}",
            product, k
        );
    }

    // -- Property 2: quote/execute agreement --------------------------------

    #[test]
    fn prop_quote_execute_agree(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount in amount_strategy(),
    ) {
        let pool = make_pool(ra, rb);
        let quoted = quote(&pool, SwapDirection::BtoA, amount);

        let mut pool = pool;
        let mut wallet = make_wallet(1e12, 1e12);
        let mut history = HistoryLog::new();
        let Ok(receipt) = execute(&mut pool, &mut wallet, &mut history, SwapDirection::BtoA, amount)
        else {
            return Ok(());
        };

        prop_assert_eq!(quoted.amount_out(), receipt.amount_out());
    }

    // -- Property 3: monotonicity -------------------------------------------

    #[test]
    fn prop_output_and_impact_monotonic(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount in amount_strategy(),
    ) {
        // Compare raw curve values: strictness holds before display rounding.
        let k = ra * rb;
        let small = curve_step(ra, rb, k, amount);
        let large = curve_step(ra, rb, k, amount * 2.0);

        prop_assert!(
            large.amount_out() > small.amount_out(),
            "output not strictly increasing: {} vs {}",
            large.amount_out(), small.amount_out()
        );
        prop_assert!(
            price_impact(ra, rb, &large) > price_impact(ra, rb, &small),
            "impact not strictly increasing"
        );
    }

    // -- Property 4: swap reversibility -------------------------------------

    #[test]
    fn prop_execution_worse_than_spot(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        // A trade of 1% of the input reserve keeps the impact gap well above
        // rounding granularity, so the strict inequality is decidable.
        let amount = (ra / 100.0).max(1.0);
        let pool = make_pool(ra, rb);
        let Ok(spot) = pool.spot_price(SwapDirection::AtoB) else {
            return Ok(());
        };

        let mut pool = pool;
        let mut wallet = make_wallet(1e12, 1e12);
        let mut history = HistoryLog::new();
        let Ok(receipt) = execute(&mut pool, &mut wallet, &mut history, SwapDirection::AtoB, amount)
        else {
            return Ok(());
        };
        if receipt.amount_out().get() <= 0.0 {
            return Ok(());
        }

        prop_assert!(
            receipt.amount_out().get() < amount * spot.get(),
            "executed output {} should undercut spot-price output {}",
            receipt.amount_out().get(), amount * spot.get()
        );
    }

    #[test]
    fn prop_round_trip_never_profits(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount in amount_strategy(),
    ) {
        let mut pool = make_pool(ra, rb);
        let mut wallet = make_wallet(1e12, 1e12);
        let mut history = HistoryLog::new();

        let Ok(forward) = execute(&mut pool, &mut wallet, &mut history, SwapDirection::AtoB, amount)
        else {
            return Ok(());
        };
        let received = forward.amount_out().get();
        if received <= 0.0 {
            return Ok(());
        }

        let Ok(back) = execute(&mut pool, &mut wallet, &mut history, SwapDirection::BtoA, received)
        else {
            return Ok(());
        };

        // The fee-less curve returns the input exactly; only the 6-dp credit
        // rounding can move the result, scaled by the B→A price.
        let slack = 1e-6 * (1.0 + ra / rb);
        prop_assert!(
            back.amount_out().get() <= amount + slack,
            "round-trip must not profit: final={} > original={} + slack={}",
            back.amount_out().get(), amount, slack
        );
    }

    // -- Property 5: insufficient balance mutates nothing -------------------

    #[test]
    fn prop_insufficient_balance_no_mutation(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        balance in amount_strategy(),
    ) {
        let mut pool = make_pool(ra, rb);
        let mut wallet = make_wallet(balance, balance);
        let mut history = HistoryLog::new();
        let (pool_before, wallet_before) = (pool, wallet);

        let result = execute(
            &mut pool,
            &mut wallet,
            &mut history,
            SwapDirection::AtoB,
            balance * 1.5,
        );

        prop_assert!(result.is_err());
        prop_assert_eq!(pool, pool_before);
        prop_assert_eq!(wallet, wallet_before);
        prop_assert_eq!(history.swap_count(), 0);
    }

    // -- Property 6: reset idempotence --------------------------------------

    #[test]
    fn prop_reset_idempotent(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount in amount_strategy(),
    ) {
        let Ok(pool_cfg) = PoolConfig::new(ra, rb) else {
            return Ok(());
        };
        let Ok(wallet_cfg) = WalletConfig::new(1e12, 1e12) else {
            return Ok(());
        };
        let Ok(mut session) = SwapSession::from_config(&SimulatorConfig::new(pool_cfg, wallet_cfg))
        else {
            return Ok(());
        };

        let _ = session.set_input(&amount.to_string());
        let _ = session.execute_pending();

        let Ok(()) = session.reset() else {
            return Ok(());
        };
        let once_pool = *session.pool();
        let once_wallet = *session.wallet();
        let once_count = session.history().swap_count();

        let Ok(()) = session.reset() else {
            return Ok(());
        };
        prop_assert_eq!(*session.pool(), once_pool);
        prop_assert_eq!(*session.wallet(), once_wallet);
        prop_assert_eq!(session.history().swap_count(), once_count);
    }
}
