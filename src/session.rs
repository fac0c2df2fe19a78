//! The interactive swap session: direction state, pending quote, and the
//! façade the presentation shell drives.
//!
//! A [`SwapSession`] owns one pool, one wallet, one history, and the
//! two-state direction machine.  The shell feeds it the raw amount field on
//! every keystroke ([`set_input`](SwapSession::set_input)), confirms with
//! [`execute_pending`](SwapSession::execute_pending), and re-renders from
//! the accessors.  Everything is synchronous; each operation runs to
//! completion before the next event is processed.

use log::debug;

use crate::config::SimulatorConfig;
use crate::domain::{Amount, PriceSnapshot, Quote, SwapDirection, SwapReceipt, TokenLabels};
use crate::engine;
use crate::error::SimError;
use crate::state::{HistoryLog, PoolState, UserWallet};
use crate::traits::FromConfig;

/// Whether the pending input can be executed, mirroring the states of a
/// swap button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapReadiness {
    /// No valid amount has been entered.
    EmptyInput,
    /// The amount exceeds the trader's input-token balance.
    InsufficientBalance,
    /// The swap can be executed.
    Ready,
}

/// A single-user simulator session.
///
/// The session retains its [`SimulatorConfig`] so that
/// [`reset`](SwapSession::reset) rebuilds exactly the starting state.
/// Token labels are cosmetic and deliberately survive a reset.
///
/// # Examples
///
/// ```
/// use swapsim::session::SwapSession;
///
/// let mut session = SwapSession::new();
/// let quote = session.set_input("100");
/// assert!((quote.amount_out().get() - 90.909091).abs() < 1e-9);
///
/// let receipt = session.execute_pending().expect("swap succeeds");
/// assert_eq!(receipt.amount_out(), quote.amount_out());
/// assert_eq!(session.history().swap_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SwapSession {
    config: SimulatorConfig,
    pool: PoolState,
    wallet: UserWallet,
    history: HistoryLog,
    direction: SwapDirection,
    labels: TokenLabels,
    pending_amount: Option<Amount>,
    pending_quote: Quote,
}

impl SwapSession {
    /// Creates a session with the default configuration: a balanced
    /// 1000/1000 pool and a 10000/10000 wallet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -- Accessors ----------------------------------------------------------

    /// Returns the pool state.
    #[must_use]
    pub const fn pool(&self) -> &PoolState {
        &self.pool
    }

    /// Returns the user wallet.
    #[must_use]
    pub const fn wallet(&self) -> &UserWallet {
        &self.wallet
    }

    /// Returns the price history, oldest snapshot first.
    #[must_use]
    pub const fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Returns the current swap direction.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Returns the token display labels.
    #[must_use]
    pub const fn labels(&self) -> &TokenLabels {
        &self.labels
    }

    /// Returns the labels for editing.  Label changes never touch the
    /// simulation state.
    pub fn labels_mut(&mut self) -> &mut TokenLabels {
        &mut self.labels
    }

    /// Returns the currently pending input amount, if any.
    #[must_use]
    pub const fn pending_amount(&self) -> Option<Amount> {
        self.pending_amount
    }

    /// Returns the quote for the pending input ([`Quote::EMPTY`] when no
    /// valid amount is pending).
    #[must_use]
    pub const fn pending_quote(&self) -> Quote {
        self.pending_quote
    }

    /// Returns both spot prices derived from the current reserves.
    ///
    /// # Errors
    ///
    /// Propagates [`PoolState::current_prices`] errors, which a valid pool
    /// never produces.
    pub fn current_prices(&self) -> crate::error::Result<PriceSnapshot> {
        self.pool.current_prices()
    }

    // -- Quoting ------------------------------------------------------------

    /// Projects a trade of `input_amount` in the current direction without
    /// touching the pending state.
    #[must_use]
    pub fn quote_for(&self, input_amount: f64) -> Quote {
        engine::quote(&self.pool, self.direction, input_amount)
    }

    /// Feeds the raw amount field into the session, recomputing the pending
    /// quote.
    ///
    /// Invalid text (empty, non-numeric, non-positive) clears the pending
    /// state and returns [`Quote::EMPTY`] — the form's empty state, not an
    /// error.
    pub fn set_input(&mut self, raw: &str) -> Quote {
        match Amount::parse(raw) {
            Some(amount) => {
                let quote = self.quote_for(amount.get());
                self.pending_amount = Some(amount);
                self.pending_quote = quote;
                quote
            }
            None => {
                self.clear_pending();
                Quote::EMPTY
            }
        }
    }

    /// Reports whether the pending input could be executed right now.
    #[must_use]
    pub fn readiness(&self) -> SwapReadiness {
        match self.pending_amount {
            None => SwapReadiness::EmptyInput,
            Some(amount) if !self.wallet.can_cover(self.direction, amount) => {
                SwapReadiness::InsufficientBalance
            }
            Some(_) => SwapReadiness::Ready,
        }
    }

    // -- Transitions ---------------------------------------------------------

    /// Executes the pending trade, clearing the input afterwards.
    ///
    /// # Errors
    ///
    /// - [`SimError::InvalidAmount`] if no valid amount is pending.
    /// - [`SimError::InsufficientBalance`] if the wallet cannot cover the
    ///   trade; the pending input is kept so the user can reduce it.
    pub fn execute_pending(&mut self) -> crate::error::Result<SwapReceipt> {
        let Some(amount) = self.pending_amount else {
            return Err(SimError::InvalidAmount("no pending swap amount"));
        };
        let receipt = engine::execute(
            &mut self.pool,
            &mut self.wallet,
            &mut self.history,
            self.direction,
            amount.get(),
        )?;
        self.clear_pending();
        Ok(receipt)
    }

    /// Switches the input side and discards the pending input and quote —
    /// a quote computed for the opposite direction never carries over.
    pub fn toggle_direction(&mut self) -> SwapDirection {
        self.direction = self.direction.toggled();
        self.clear_pending();
        debug!("direction toggled to {}", self.direction);
        self.direction
    }

    /// Reinitializes pool, wallet, history, direction, and pending state
    /// from the retained configuration.  Token labels are kept.
    ///
    /// Calling `reset` twice in a row yields the same state as once.
    ///
    /// # Errors
    ///
    /// Propagates configuration validation errors; a session constructed
    /// through [`FromConfig`] never hits them.
    pub fn reset(&mut self) -> crate::error::Result<()> {
        self.pool = PoolState::from_config(self.config.pool())?;
        self.wallet = UserWallet::from_config(self.config.wallet())?;
        self.history.reset();
        self.direction = SwapDirection::default();
        self.clear_pending();
        debug!("session reset to initial state");
        Ok(())
    }

    fn clear_pending(&mut self) {
        self.pending_amount = None;
        self.pending_quote = Quote::EMPTY;
    }
}

impl FromConfig<SimulatorConfig> for SwapSession {
    fn from_config(config: &SimulatorConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            config: *config,
            pool: PoolState::from_config(config.pool())?,
            wallet: UserWallet::from_config(config.wallet())?,
            history: HistoryLog::new(),
            direction: SwapDirection::default(),
            labels: TokenLabels::default(),
            pending_amount: None,
            pending_quote: Quote::EMPTY,
        })
    }
}

impl Default for SwapSession {
    fn default() -> Self {
        Self {
            config: SimulatorConfig::default(),
            pool: PoolState::default(),
            wallet: UserWallet::default(),
            history: HistoryLog::new(),
            direction: SwapDirection::default(),
            labels: TokenLabels::default(),
            pending_amount: None,
            pending_quote: Quote::EMPTY,
        }
    }
}
