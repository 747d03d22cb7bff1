//! Percentage and unit conversion primitives.
//!
//! Every monetary figure in the engine goes through these functions, so the
//! rounding rule lives in exactly one place.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of months in a year. Yearly figures are always monthly times this.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Rounds to 2 decimal places, half away from zero.
///
/// The result always carries a scale of 2 so it renders as e.g. `650.00`.
pub fn round2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Returns `percentage` percent of `base`, rounded to 2 decimal places.
///
/// Returns zero (at scale 2) if either input is zero.
///
/// # Examples
///
/// ```
/// use salary_breakup::calculation::amount_from_percentage;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let esic = amount_from_percentage(Decimal::from_str("3.25").unwrap(), Decimal::new(20000, 0));
/// assert_eq!(esic, Decimal::new(650, 0));
///
/// assert_eq!(amount_from_percentage(Decimal::ZERO, Decimal::new(20000, 0)), Decimal::ZERO);
/// ```
pub fn amount_from_percentage(percentage: Decimal, base: Decimal) -> Decimal {
    if percentage.is_zero() || base.is_zero() {
        return round2(Decimal::ZERO);
    }
    round2(percentage / Decimal::ONE_HUNDRED * base)
}

/// Converts a monthly figure to a yearly one.
pub fn annualise(monthly: Decimal) -> Decimal {
    monthly * MONTHS_PER_YEAR
}

/// Converts a yearly figure to a monthly one.
pub fn monthly_from_yearly(yearly: Decimal) -> Decimal {
    yearly / MONTHS_PER_YEAR
}

/// Renders a percentage for display, e.g. `12%` or `3.25%`.
pub fn percentage_label(percentage: Decimal) -> String {
    format!("{}%", percentage.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_whole_percentage() {
        assert_eq!(amount_from_percentage(dec("50"), dec("20000")), dec("10000"));
    }

    #[test]
    fn test_fractional_percentage() {
        assert_eq!(amount_from_percentage(dec("3.25"), dec("20000")), dec("650"));
        assert_eq!(amount_from_percentage(dec("0.75"), dec("20000")), dec("150"));
    }

    #[test]
    fn test_result_is_rounded_to_two_places() {
        // 3.25% of 12345 = 401.2125
        assert_eq!(amount_from_percentage(dec("3.25"), dec("12345")), dec("401.21"));
        // 0.75% of 12345 = 92.5875
        assert_eq!(amount_from_percentage(dec("0.75"), dec("12345")), dec("92.59"));
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        // 1% of 0.5 = 0.005
        assert_eq!(amount_from_percentage(dec("1"), dec("0.5")), dec("0.01"));
        assert_eq!(round2(dec("-0.005")), dec("-0.01"));
    }

    #[test]
    fn test_round2_renders_two_places() {
        assert_eq!(round2(dec("650")).to_string(), "650.00");
        assert_eq!(round2(dec("17550.5")).to_string(), "17550.50");
    }

    #[test]
    fn test_zero_inputs_short_circuit() {
        assert_eq!(amount_from_percentage(Decimal::ZERO, dec("20000")), Decimal::ZERO);
        assert_eq!(amount_from_percentage(dec("12"), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_zero_result_carries_two_places() {
        assert_eq!(amount_from_percentage(dec("3.25"), Decimal::ZERO).to_string(), "0.00");
        assert_eq!(amount_from_percentage(Decimal::ZERO, dec("20000")).to_string(), "0.00");
    }

    #[test]
    fn test_negative_base_propagates() {
        assert_eq!(amount_from_percentage(dec("50"), dec("-1000")), dec("-500"));
    }

    #[test]
    fn test_months_per_year_is_twelve() {
        assert_eq!(MONTHS_PER_YEAR, dec("12"));
    }

    #[test]
    fn test_unit_conversions() {
        assert_eq!(annualise(dec("21950")), dec("263400"));
        assert_eq!(monthly_from_yearly(dec("240000")), dec("20000"));
    }

    #[test]
    fn test_percentage_label_drops_trailing_zeros() {
        assert_eq!(percentage_label(dec("12")), "12%");
        assert_eq!(percentage_label(dec("12.00")), "12%");
        assert_eq!(percentage_label(dec("3.25")), "3.25%");
        assert_eq!(percentage_label(dec("0.75")), "0.75%");
    }
}
