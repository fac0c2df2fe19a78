//! Per-swap price snapshot and trend readout.

use core::fmt;

use super::{Amount, Percent, Price};
use crate::math::round_percent;

/// Direction of a price move between two consecutive snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PriceTrend {
    /// The price went up since the previous snapshot.
    Rising,
    /// The price went down since the previous snapshot.
    Falling,
    /// The price did not move.
    Flat,
}

/// The pool's spot prices captured after a swap.
///
/// `price_a_in_b` is how much of token B one unit of token A buys
/// (`reserve_b / reserve_a`); `price_b_in_a` is the reciprocal.  A fresh
/// pool with equal reserves starts at [`PriceSnapshot::INITIAL`] (1:1).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceSnapshot {
    price_a_in_b: Price,
    price_b_in_a: Price,
}

impl PriceSnapshot {
    /// The 1:1 snapshot every history starts with.
    pub const INITIAL: Self = Self {
        price_a_in_b: Price::ONE,
        price_b_in_a: Price::ONE,
    };

    /// Creates a snapshot from two already-computed prices.
    pub const fn new(price_a_in_b: Price, price_b_in_a: Price) -> Self {
        Self {
            price_a_in_b,
            price_b_in_a,
        }
    }

    /// Computes the snapshot for the given reserves.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::DivisionByZero`](crate::error::SimError) if either
    /// reserve is zero.
    pub fn from_reserves(reserve_a: Amount, reserve_b: Amount) -> crate::error::Result<Self> {
        Ok(Self {
            price_a_in_b: Price::from_reserves(reserve_b, reserve_a)?,
            price_b_in_a: Price::from_reserves(reserve_a, reserve_b)?,
        })
    }

    /// Returns token A's price in units of token B.
    pub const fn price_a_in_b(&self) -> Price {
        self.price_a_in_b
    }

    /// Returns token B's price in units of token A.
    pub const fn price_b_in_a(&self) -> Price {
        self.price_b_in_a
    }

    /// Compares token A's price against a previous snapshot.
    ///
    /// Token B's trend is the mirror image: when A rises in B terms, B falls
    /// in A terms.
    #[must_use]
    pub fn trend_from(&self, previous: &Self) -> PriceTrend {
        let current = self.price_a_in_b.get();
        let prior = previous.price_a_in_b.get();
        if current > prior {
            PriceTrend::Rising
        } else if current < prior {
            PriceTrend::Falling
        } else {
            PriceTrend::Flat
        }
    }

    /// Returns the magnitude of token A's price move since `previous`, as a
    /// percentage rounded to 2 decimals: `|current/prior − 1| × 100`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::DivisionByZero`](crate::error::SimError) if the
    /// previous price is zero.
    pub fn change_percent_from(&self, previous: &Self) -> crate::error::Result<Percent> {
        if previous.price_a_in_b.get() == 0.0 {
            return Err(crate::error::SimError::DivisionByZero);
        }
        let ratio = self.price_a_in_b.get() / previous.price_a_in_b.get();
        Percent::new(round_percent((ratio - 1.0).abs() * 100.0))
    }
}

impl fmt::Display for PriceSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1A={}B, 1B={}A", self.price_a_in_b, self.price_b_in_a)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn amount(value: f64) -> Amount {
        let Ok(a) = Amount::new(value) else {
            panic!("valid amount");
        };
        a
    }

    // -- Construction ---------------------------------------------------------

    #[test]
    fn initial_is_one_to_one() {
        assert_eq!(PriceSnapshot::INITIAL.price_a_in_b(), Price::ONE);
        assert_eq!(PriceSnapshot::INITIAL.price_b_in_a(), Price::ONE);
    }

    #[test]
    fn from_reserves_balanced() {
        let Ok(snap) = PriceSnapshot::from_reserves(amount(1_000.0), amount(1_000.0)) else {
            panic!("expected Ok");
        };
        assert_eq!(snap, PriceSnapshot::INITIAL);
    }

    #[test]
    fn from_reserves_skewed() {
        let Ok(snap) = PriceSnapshot::from_reserves(amount(1_100.0), amount(909.090_909_090_909_1))
        else {
            panic!("expected Ok");
        };
        assert!((snap.price_a_in_b().get() - 0.826_446_280_991_735_5).abs() < 1e-12);
        assert!((snap.price_b_in_a().get() - 1.21).abs() < 1e-12);
    }

    #[test]
    fn from_reserves_prices_are_reciprocal() {
        let Ok(snap) = PriceSnapshot::from_reserves(amount(1_234.0), amount(777.0)) else {
            panic!("expected Ok");
        };
        let product = snap.price_a_in_b().get() * snap.price_b_in_a().get();
        assert!((product - 1.0).abs() < 1e-12);
    }

    #[test]
    fn from_reserves_zero_rejected() {
        assert!(PriceSnapshot::from_reserves(Amount::ZERO, amount(1.0)).is_err());
        assert!(PriceSnapshot::from_reserves(amount(1.0), Amount::ZERO).is_err());
    }

    // -- trend_from -----------------------------------------------------------

    #[test]
    fn trend_falling_after_selling_a() {
        // Selling A grows reserve A, so A's price in B terms drops.
        let Ok(after) = PriceSnapshot::from_reserves(amount(1_100.0), amount(909.1)) else {
            panic!("expected Ok");
        };
        assert_eq!(after.trend_from(&PriceSnapshot::INITIAL), PriceTrend::Falling);
    }

    #[test]
    fn trend_rising_after_selling_b() {
        let Ok(after) = PriceSnapshot::from_reserves(amount(909.1), amount(1_100.0)) else {
            panic!("expected Ok");
        };
        assert_eq!(after.trend_from(&PriceSnapshot::INITIAL), PriceTrend::Rising);
    }

    #[test]
    fn trend_flat_for_identical_snapshots() {
        assert_eq!(
            PriceSnapshot::INITIAL.trend_from(&PriceSnapshot::INITIAL),
            PriceTrend::Flat
        );
    }

    // -- change_percent_from --------------------------------------------------

    #[test]
    fn change_percent_rounds_to_two_places() {
        let Ok(after) = PriceSnapshot::from_reserves(amount(1_100.0), amount(909.090_909_090_909_1))
        else {
            panic!("expected Ok");
        };
        let Ok(change) = after.change_percent_from(&PriceSnapshot::INITIAL) else {
            panic!("expected Ok");
        };
        // |0.826446/1 − 1| × 100 = 17.355… → 17.36
        assert!((change.get() - 17.36).abs() < 1e-12);
    }

    #[test]
    fn change_percent_zero_for_identical() {
        let Ok(change) = PriceSnapshot::INITIAL.change_percent_from(&PriceSnapshot::INITIAL) else {
            panic!("expected Ok");
        };
        assert!(change.is_zero());
    }

    // -- Display --------------------------------------------------------------

    #[test]
    fn display() {
        let s = format!("{}", PriceSnapshot::INITIAL);
        assert!(s.contains("1.000000"));
    }

    #[test]
    fn copy_semantics() {
        let a = PriceSnapshot::INITIAL;
        let b = a;
        assert_eq!(a, b);
    }
}
