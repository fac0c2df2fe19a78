//! Projected outcome of a hypothetical trade.

use core::fmt;

use super::{Amount, Percent};

/// Price-impact threshold above which a quote is classified
/// [`ImpactSeverity::Moderate`].
const MODERATE_IMPACT_PERCENT: f64 = 2.0;

/// Price-impact threshold above which a quote is classified
/// [`ImpactSeverity::High`].
const HIGH_IMPACT_PERCENT: f64 = 5.0;

/// Coarse classification of a quote's price impact.
///
/// Thresholds: impact ≤ 2% is `Low`, ≤ 5% is `Moderate`, above that `High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImpactSeverity {
    /// Negligible price movement.
    Low,
    /// Noticeable price movement; the trader should double-check the size.
    Moderate,
    /// The trade moves the pool price substantially.
    High,
}

impl ImpactSeverity {
    /// Classifies a price-impact percentage.
    #[must_use]
    pub fn classify(impact: Percent) -> Self {
        if impact.get() > HIGH_IMPACT_PERCENT {
            Self::High
        } else if impact.get() > MODERATE_IMPACT_PERCENT {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

/// The projected outcome of a trade against the current pool, computed
/// without mutating anything.
///
/// A `Quote` is ephemeral — it is recomputed on every input change and never
/// persisted.  The values carry the canonical display rounding: the output
/// amount to 6 decimal places, the percentages to 2.
///
/// [`Quote::EMPTY`] models the empty/invalid-input state of the swap form;
/// it is a value, not an error.
///
/// # Examples
///
/// ```
/// use swapsim::domain::Quote;
///
/// assert!(Quote::EMPTY.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quote {
    amount_out: Amount,
    price_impact: Percent,
    slippage: Percent,
}

impl Quote {
    /// The zero-valued quote returned for empty or invalid input.
    pub const EMPTY: Self = Self {
        amount_out: Amount::ZERO,
        price_impact: Percent::ZERO,
        slippage: Percent::ZERO,
    };

    /// Assembles a quote from already-rounded components.
    pub const fn new(amount_out: Amount, price_impact: Percent, slippage: Percent) -> Self {
        Self {
            amount_out,
            price_impact,
            slippage,
        }
    }

    /// Returns the projected output amount (6-decimal rounded).
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the projected price impact as a percentage (2-decimal rounded).
    pub const fn price_impact(&self) -> Percent {
        self.price_impact
    }

    /// Returns the slippage estimate as a percentage (2-decimal rounded).
    ///
    /// This is an educational proxy — half of the price impact — not a real
    /// slippage-tolerance model.
    pub const fn slippage(&self) -> Percent {
        self.slippage
    }

    /// Returns `true` if this is the empty/invalid-input quote.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.amount_out.is_zero()
    }

    /// Classifies the quote's price impact.
    #[must_use]
    pub fn impact_severity(&self) -> ImpactSeverity {
        ImpactSeverity::classify(self.price_impact)
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quote(out={}, impact={}%, slippage={}%)",
            self.amount_out, self.price_impact, self.slippage
        )
    }
}
