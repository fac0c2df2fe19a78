//! Arithmetic utilities for the swap simulator.
//!
//! This module provides the shared constant-product [`curve_step`] — the
//! single pricing routine used by both quoting and execution — and the
//! canonical decimal rounding rules for displayed values.

mod curve;
mod rounding;

pub use curve::{curve_step, price_impact, CurveStep};
pub use rounding::{round_amount, round_dp, round_percent, AMOUNT_DECIMALS, PERCENT_DECIMALS};
