//! Swap execution: the only mutator of pool, wallet, and history.

use log::debug;

use crate::domain::{Amount, PriceSnapshot, SwapDirection, SwapReceipt};
use crate::error::SimError;
use crate::math::{curve_step, round_amount};
use crate::state::{HistoryLog, PoolState, UserWallet};

/// Executes a validated trade against the pool.
///
/// Prices the trade through the same curve step as
/// [`quote`](crate::engine::quote), so the output credited here is exactly
/// the output a prior quote displayed (both carry the canonical 6-decimal
/// rounding).  The pool keeps the full-precision post-trade reserves,
/// which preserves `reserve_a × reserve_b = k` analytically; `invariant_k`
/// itself is never touched.
///
/// The update is atomic: every fallible computation happens before the
/// first mutation, so an error leaves pool, wallet, and history unchanged.
///
/// # Errors
///
/// - [`SimError::InvalidAmount`] if `input_amount` is non-finite or not
///   positive.  The quoting path treats this as an empty form; the
///   executor rejects it defensively.
/// - [`SimError::InsufficientBalance`] if the trader's input-token balance
///   cannot cover the trade.
pub fn execute(
    pool: &mut PoolState,
    wallet: &mut UserWallet,
    history: &mut HistoryLog,
    direction: SwapDirection,
    input_amount: f64,
) -> crate::error::Result<SwapReceipt> {
    if !input_amount.is_finite() || input_amount <= 0.0 {
        return Err(SimError::InvalidAmount(
            "swap amount must be a positive finite number",
        ));
    }
    let amount_in = Amount::new(input_amount)?;

    if !wallet.can_cover(direction, amount_in) {
        return Err(SimError::InsufficientBalance);
    }

    let (reserve_in, reserve_out) = pool.reserves_for(direction);
    let step = curve_step(
        reserve_in.get(),
        reserve_out.get(),
        pool.invariant_k(),
        input_amount,
    );

    let new_reserve_in = Amount::new(step.new_reserve_in())?;
    let new_reserve_out = Amount::new(step.new_reserve_out())?;
    let amount_out = Amount::new(round_amount(step.amount_out()))?;

    let (new_reserve_a, new_reserve_b) = if direction.is_a_to_b() {
        (new_reserve_in, new_reserve_out)
    } else {
        (new_reserve_out, new_reserve_in)
    };
    let snapshot = PriceSnapshot::from_reserves(new_reserve_a, new_reserve_b)?;
    let receipt = SwapReceipt::new(direction, amount_in, amount_out, snapshot)?;

    // All fallible work is done; apply the trade as one transaction.
    wallet.apply_trade(direction, amount_in, amount_out)?;
    pool.commit(direction, new_reserve_in, new_reserve_out);
    history.record(snapshot);

    debug!("executed swap {direction}: in={amount_in} out={amount_out}");

    Ok(receipt)
}
