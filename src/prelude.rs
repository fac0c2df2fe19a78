//! Convenience re-exports for common types and functions.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use swapsim::prelude::*;
//! ```

// Re-export domain types
pub use crate::domain::{
    Amount, ImpactSeverity, Percent, Price, PriceSnapshot, PriceTrend, Quote, SwapDirection,
    SwapReceipt, TokenLabels,
};

// Re-export configuration
pub use crate::config::{PoolConfig, SimulatorConfig, WalletConfig};

// Re-export state
pub use crate::state::{HistoryLog, PoolState, UserWallet};

// Re-export the engines
pub use crate::engine::{execute, quote};

// Re-export the session façade
pub use crate::session::{SwapReadiness, SwapSession};

// Re-export core traits
pub use crate::traits::FromConfig;

// Re-export error types
pub use crate::error::{Result, SimError};
