//! The constant-product curve step (`x · y = k`).
//!
//! Both the quote engine and the swap executor price trades through
//! [`curve_step`], so a quote and the execution that follows it agree
//! bit-for-bit on the formula.
//!
//! # Algorithm (exact-in, no fee)
//!
//! Given reserves `(x, y)` for the input and output tokens, the fixed
//! invariant `k`, and input `Δx`:
//!
//! ```text
//! new_x   = x + Δx
//! new_y   = k / new_x
//! raw_out = max(y − new_y, 0)
//! ```
//!
//! Output approaches `y` asymptotically as `Δx` grows — the hyperbola is
//! never capped.  All values stay in full `f64` precision; callers apply
//! the canonical display rounding.

/// Result of advancing the curve by one exact-in trade.
///
/// Values are full-precision; no rounding has been applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveStep {
    new_reserve_in: f64,
    new_reserve_out: f64,
    amount_out: f64,
}

impl CurveStep {
    /// Returns the post-trade reserve of the input token.
    #[must_use]
    pub const fn new_reserve_in(&self) -> f64 {
        self.new_reserve_in
    }

    /// Returns the post-trade reserve of the output token.
    #[must_use]
    pub const fn new_reserve_out(&self) -> f64 {
        self.new_reserve_out
    }

    /// Returns the raw (unrounded) output amount, floored at zero.
    #[must_use]
    pub const fn amount_out(&self) -> f64 {
        self.amount_out
    }
}

/// Advances the constant-product curve by adding `amount_in` to the input
/// reserve.
///
/// The invariant `k` is a parameter rather than being recomputed from the
/// reserves: it is fixed at pool creation and reusing it here is what keeps
/// the product preserved analytically across trades.
#[must_use]
pub fn curve_step(reserve_in: f64, reserve_out: f64, invariant_k: f64, amount_in: f64) -> CurveStep {
    let new_reserve_in = reserve_in + amount_in;
    let new_reserve_out = invariant_k / new_reserve_in;
    let amount_out = (reserve_out - new_reserve_out).max(0.0);
    CurveStep {
        new_reserve_in,
        new_reserve_out,
        amount_out,
    }
}

/// Computes the spot-price impact of a step as an unrounded percentage.
///
/// `initial = y/x`, `final = new_y/new_x`, impact `= |final/initial − 1| × 100`.
#[must_use]
pub fn price_impact(reserve_in: f64, reserve_out: f64, step: &CurveStep) -> f64 {
    let initial_price = reserve_out / reserve_in;
    let final_price = step.new_reserve_out / step.new_reserve_in;
    (final_price / initial_price - 1.0).abs() * 100.0
}
