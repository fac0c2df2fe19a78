//! Token quantity with validated floating-point arithmetic.

use core::fmt;

use crate::error::SimError;
use crate::math::round_amount;

/// A token quantity backed by `f64`.
///
/// An `Amount` is always finite and non-negative; the validated constructor
/// is the only public way in.  Arithmetic methods are checked: they return
/// an error instead of producing a negative or non-finite value.
///
/// Display uses the canonical 6-decimal formatting shared with prices.
///
/// # Examples
///
/// ```
/// use swapsim::domain::Amount;
///
/// let a = Amount::new(100.0).expect("valid amount");
/// let b = Amount::new(40.0).expect("valid amount");
/// let diff = a.checked_sub(&b).expect("no underflow");
/// assert!((diff.get() - 60.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct Amount(f64);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Amount`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidAmount`] if `value` is negative, NaN, or
    /// infinite.
    pub fn new(value: f64) -> crate::error::Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(SimError::InvalidAmount(
                "amount must be finite and non-negative",
            ));
        }
        Ok(Self(value))
    }

    /// Constructs an `Amount` from a value already known to be valid.
    ///
    /// Callers must guarantee the value is finite and non-negative.
    pub(crate) const fn from_raw(value: f64) -> Self {
        Self(value)
    }

    /// Returns the underlying `f64` value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Parses the contents of an amount input field.
    ///
    /// Returns `None` for empty, non-numeric, non-finite, or non-positive
    /// text.  This mirrors the empty-input state of a swap form, which is
    /// not an error condition.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let value: f64 = input.trim().parse().ok()?;
        if !value.is_finite() || value <= 0.0 {
            return None;
        }
        Some(Self(value))
    }

    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidAmount`] if the sum is not finite.
    pub fn checked_add(&self, other: &Self) -> crate::error::Result<Self> {
        let result = self.0 + other.0;
        if !result.is_finite() {
            return Err(SimError::InvalidAmount("amount addition overflow"));
        }
        Ok(Self(result))
    }

    /// Checked subtraction.  A result that would go negative is rejected,
    /// never clamped.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidAmount`] if `other > self`.
    pub fn checked_sub(&self, other: &Self) -> crate::error::Result<Self> {
        let result = self.0 - other.0;
        if result < 0.0 {
            return Err(SimError::InvalidAmount("amount subtraction underflow"));
        }
        Ok(Self(result))
    }

    /// Rounds to the canonical 6-decimal display precision.
    pub fn rounded(&self) -> Self {
        Self(round_amount(self.0))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- Construction & accessors -------------------------------------------

    #[test]
    fn new_and_get() {
        let Ok(a) = Amount::new(42.5) else {
            panic!("expected Ok");
        };
        assert!((a.get() - 42.5).abs() < f64::EPSILON);
    }

    #[test]
    fn new_zero_valid() {
        assert!(Amount::new(0.0).is_ok());
    }

    #[test]
    fn new_negative_rejected() {
        assert!(Amount::new(-1.0).is_err());
    }

    #[test]
    fn new_nan_rejected() {
        assert!(Amount::new(f64::NAN).is_err());
    }

    #[test]
    fn new_infinity_rejected() {
        assert!(Amount::new(f64::INFINITY).is_err());
    }

    #[test]
    fn default_is_zero() {
        assert!(Amount::default().is_zero());
    }

    #[test]
    fn is_zero_false_for_positive() {
        let Ok(a) = Amount::new(0.000_001) else {
            panic!("expected Ok");
        };
        assert!(!a.is_zero());
    }

    // -- parse ----------------------------------------------------------------

    #[test]
    fn parse_valid() {
        let Some(a) = Amount::parse("123.45") else {
            panic!("expected Some");
        };
        assert!((a.get() - 123.45).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_trims_whitespace() {
        assert!(Amount::parse("  7 ").is_some());
    }

    #[test]
    fn parse_empty_is_none() {
        assert!(Amount::parse("").is_none());
    }

    #[test]
    fn parse_non_numeric_is_none() {
        assert!(Amount::parse("abc").is_none());
    }

    #[test]
    fn parse_zero_is_none() {
        assert!(Amount::parse("0").is_none());
    }

    #[test]
    fn parse_negative_is_none() {
        assert!(Amount::parse("-5").is_none());
    }

    #[test]
    fn parse_infinity_is_none() {
        assert!(Amount::parse("inf").is_none());
    }

    // -- checked_add ----------------------------------------------------------

    #[test]
    fn add_normal() {
        let Ok(a) = Amount::new(100.0) else {
            panic!("expected Ok");
        };
        let Ok(b) = Amount::new(200.0) else {
            panic!("expected Ok");
        };
        let Ok(sum) = a.checked_add(&b) else {
            panic!("expected Ok");
        };
        assert!((sum.get() - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn add_zero_identity() {
        let Ok(a) = Amount::new(42.0) else {
            panic!("expected Ok");
        };
        assert_eq!(a.checked_add(&Amount::ZERO), Ok(a));
    }

    #[test]
    fn add_overflow_rejected() {
        let Ok(a) = Amount::new(f64::MAX) else {
            panic!("expected Ok");
        };
        assert!(a.checked_add(&a).is_err());
    }

    // -- checked_sub ----------------------------------------------------------

    #[test]
    fn sub_normal() {
        let Ok(a) = Amount::new(300.0) else {
            panic!("expected Ok");
        };
        let Ok(b) = Amount::new(100.0) else {
            panic!("expected Ok");
        };
        let Ok(diff) = a.checked_sub(&b) else {
            panic!("expected Ok");
        };
        assert!((diff.get() - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn sub_to_zero() {
        let Ok(a) = Amount::new(42.0) else {
            panic!("expected Ok");
        };
        let Ok(diff) = a.checked_sub(&a) else {
            panic!("expected Ok");
        };
        assert!(diff.is_zero());
    }

    #[test]
    fn sub_underflow_rejected() {
        let Ok(a) = Amount::new(1.0) else {
            panic!("expected Ok");
        };
        let Ok(b) = Amount::new(2.0) else {
            panic!("expected Ok");
        };
        assert!(a.checked_sub(&b).is_err());
    }

    // -- rounded --------------------------------------------------------------

    #[test]
    fn rounded_to_six_places() {
        let Ok(a) = Amount::new(90.909_090_909_090_91) else {
            panic!("expected Ok");
        };
        assert!((a.rounded().get() - 90.909_091).abs() < 1e-12);
    }

    // -- Display & ordering ---------------------------------------------------

    #[test]
    fn display_six_decimals() {
        let Ok(a) = Amount::new(1.5) else {
            panic!("expected Ok");
        };
        assert_eq!(format!("{a}"), "1.500000");
    }

    #[test]
    fn ordering() {
        let Ok(small) = Amount::new(1.0) else {
            panic!("expected Ok");
        };
        let Ok(big) = Amount::new(2.0) else {
            panic!("expected Ok");
        };
        assert!(small < big);
    }

    #[test]
    fn copy_semantics() {
        let Ok(a) = Amount::new(99.0) else {
            panic!("expected Ok");
        };
        let b = a;
        assert_eq!(a, b);
    }

    #[test]
    fn debug_format() {
        let Ok(a) = Amount::new(42.0) else {
            panic!("expected Ok");
        };
        let dbg = format!("{a:?}");
        assert!(dbg.contains("Amount"));
    }
}
