//! Canonical decimal rounding for displayed values.
//!
//! Numeric display formatting is a core contract: amounts and prices round
//! to 6 decimal places, percentages to 2.  The presentation layer must not
//! apply its own rounding, since these rules define what "equal" means for
//! comparison and round-trip tests.

/// Decimal places used for amounts and prices.
pub const AMOUNT_DECIMALS: i32 = 6;

/// Decimal places used for percentages.
pub const PERCENT_DECIMALS: i32 = 2;

/// Rounds `value` to `decimals` decimal places, half away from zero.
#[must_use]
pub fn round_dp(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Rounds an amount or price to the canonical 6 decimal places.
#[must_use]
pub fn round_amount(value: f64) -> f64 {
    round_dp(value, AMOUNT_DECIMALS)
}

/// Rounds a percentage to the canonical 2 decimal places.
#[must_use]
pub fn round_percent(value: f64) -> f64 {
    round_dp(value, PERCENT_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_amount_six_places() {
        let value = 90.909_090_909_090_91;
        assert!((round_amount(value) - 90.909_091).abs() < 1e-12);
    }

    #[test]
    fn round_amount_exact_value_unchanged() {
        assert!((round_amount(1.5) - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn round_percent_two_places() {
        assert!((round_percent(17.355_371) - 17.36).abs() < 1e-12);
    }

    #[test]
    fn round_percent_to_nearest() {
        assert!((round_percent(2.006) - 2.01).abs() < 1e-9);
        assert!((round_percent(2.004) - 2.00).abs() < 1e-9);
    }

    #[test]
    fn round_dp_zero_places() {
        assert!((round_dp(2.6, 0) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn round_zero() {
        assert!((round_amount(0.0) - 0.0).abs() < f64::EPSILON);
        assert!((round_percent(0.0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn round_amount_truncates_sub_micro() {
        assert!((round_amount(0.000_000_4) - 0.0).abs() < f64::EPSILON);
        assert!((round_amount(0.000_000_6) - 0.000_001).abs() < 1e-12);
    }
}
