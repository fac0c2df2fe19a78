//! Unified error types for the swap simulator core.
//!
//! All fallible operations across the crate return [`SimError`] as their
//! error type, ensuring a consistent error handling experience for consumers.
//!
//! The simulator deliberately has a small failure surface: there is no I/O,
//! no networking, and no parsing beyond the numeric amount field.  Invalid
//! amount *input* is not an error on the quoting path — the quote engine
//! recovers locally with [`Quote::EMPTY`](crate::domain::Quote::EMPTY) — but
//! the executor rejects it defensively with [`SimError::InvalidAmount`].

use core::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, SimError>;

/// Unified error enum for the simulator core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
    /// An amount failed validation: non-finite, negative, or non-positive
    /// where a positive value is required.
    InvalidAmount(&'static str),
    /// The trader's balance of the input token cannot cover the requested
    /// trade.  No mutation is performed.
    InsufficientBalance,
    /// A pool reserve is zero where a positive value is required.
    ZeroReserve,
    /// A price value failed validation (negative, NaN, or infinite).
    InvalidPrice(&'static str),
    /// Division by zero during a price computation.
    DivisionByZero,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAmount(msg) => write!(f, "invalid amount: {msg}"),
            Self::InsufficientBalance => write!(f, "insufficient balance for swap"),
            Self::ZeroReserve => write!(f, "pool reserve must be positive"),
            Self::InvalidPrice(msg) => write!(f, "invalid price: {msg}"),
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for SimError {}
