//! # Swapsim
//!
//! The arithmetic and state core of an educational constant-product AMM
//! swap simulator: pool reserves, quotes, execution, a simulated wallet,
//! and a price history — everything a presentation shell needs to render a
//! two-token swap widget, with no rendering concerns of its own.
//!
//! The pool follows the constant-product rule `x · y = k`: a trade adds to
//! one reserve and derives the other from the fixed invariant, so the
//! product is preserved analytically across swaps.  Quoting and execution
//! share a single pricing routine and a single rounding rule (6 decimal
//! places for amounts and prices, 2 for percentages), so the number a quote
//! displays is the number an execution credits.
//!
//! # Quick Start
//!
//! ```rust
//! use swapsim::prelude::*;
//!
//! // A fresh session: 1000/1000 pool (k = 1 000 000), 10000/10000 wallet.
//! let mut session = SwapSession::new();
//!
//! // Quote on every keystroke; invalid text is the empty state, not an error.
//! let quote = session.set_input("100");
//! assert!((quote.amount_out().get() - 90.909091).abs() < 1e-9);
//! assert_eq!(quote.impact_severity(), ImpactSeverity::High);
//!
//! // Execute the pending trade.
//! let receipt = session.execute_pending().expect("balance covers the trade");
//! assert_eq!(receipt.amount_out(), quote.amount_out());
//!
//! // One snapshot per swap, after the initial 1:1 entry.
//! assert_eq!(session.history().swap_count(), 1);
//!
//! // Toggle the input side; pending input never carries over.
//! session.toggle_direction();
//! assert!(session.pending_quote().is_empty());
//!
//! // Reset restores the configured starting state (labels are kept).
//! session.reset().expect("config is valid");
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────┐
//! │ Presentation shell  │  out of scope: rendering, theming, DOM
//! └─────────┬──────────┘
//!           │ set_input / execute_pending / toggle / reset
//!           ▼
//! ┌────────────────────┐
//! │    SwapSession      │  direction + pending-quote state machine
//! └─────────┬──────────┘
//!           │ quote (read-only)        execute (sole mutator)
//!           ▼                          ▼
//! ┌────────────────────┐   ┌──────────────────────────────┐
//! │      engine         │──▶│ PoolState · UserWallet ·      │
//! │  (shared curve step)│   │ HistoryLog                    │
//! └────────────────────┘   └──────────────────────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Price`](domain::Price), [`Quote`](domain::Quote), [`PriceSnapshot`](domain::PriceSnapshot), … |
//! | [`config`] | Validated initial-state blueprints with the stock defaults |
//! | [`state`] | [`PoolState`](state::PoolState), [`UserWallet`](state::UserWallet), [`HistoryLog`](state::HistoryLog) |
//! | [`engine`] | [`quote`](engine::quote) and [`execute`](engine::execute) |
//! | [`math`] | The shared curve step and canonical rounding rules |
//! | [`session`] | [`SwapSession`](session::SwapSession) façade and state machine |
//! | [`traits`] | [`FromConfig`](traits::FromConfig) construction seam |
//! | [`error`] | [`SimError`](error::SimError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod math;
pub mod prelude;
pub mod session;
pub mod state;
pub mod traits;
