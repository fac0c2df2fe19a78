//! Fundamental domain value types for the swap simulator.
//!
//! This module contains the value types that model the simulator domain:
//! amounts, prices, percentages, swap direction, token labels, quotes, and
//! price snapshots.  All numeric types are newtypes over `f64` with
//! validated constructors that enforce finiteness and sign invariants.

mod amount;
mod direction;
mod percent;
mod price;
mod quote;
mod receipt;
mod snapshot;
mod token_label;

pub use amount::Amount;
pub use direction::SwapDirection;
pub use percent::Percent;
pub use price::Price;
pub use quote::{ImpactSeverity, Quote};
pub use receipt::SwapReceipt;
pub use snapshot::{PriceSnapshot, PriceTrend};
pub use token_label::TokenLabels;
