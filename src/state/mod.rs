//! Mutable simulation state: pool, wallet, and price history.
//!
//! All three entities are created from [`config`](crate::config) blueprints
//! and mutated only by the swap executor, which updates them as one logical
//! transaction.

mod history;
mod pool;
mod wallet;

pub use history::HistoryLog;
pub use pool::PoolState;
pub use wallet::UserWallet;
