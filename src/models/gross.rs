//! Gross amount model.
//!
//! A gross amount is a single value that can be read in two units. The unit
//! the caller last edited is the source of truth and the other unit is
//! always derived from it, so an edit converges in one step.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{annualise, monthly_from_yearly};

/// Largest monthly gross the engine computes with: 10^15.
///
/// Yearly figures, CTC and every percentage amount derived from a gross at
/// or below this stay far inside `Decimal` range, so no step can overflow.
pub const MAX_GROSS_MONTHLY: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// The unit a gross amount was entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrossUnit {
    /// Amount per month.
    Monthly,
    /// Amount per year.
    Yearly,
}

/// A gross compensation amount tagged with the unit it was entered in.
///
/// # Examples
///
/// ```
/// use salary_breakup::models::{GrossAmount, GrossUnit};
/// use rust_decimal::Decimal;
///
/// let gross = GrossAmount::yearly(Decimal::new(240000, 0));
/// assert_eq!(gross.edited_unit(), GrossUnit::Yearly);
/// assert_eq!(gross.to_monthly(), Decimal::new(20000, 0));
/// assert_eq!(gross.to_yearly(), Decimal::new(240000, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrossAmount {
    value: Decimal,
    unit: GrossUnit,
}

impl GrossAmount {
    /// Creates a gross amount entered as a monthly figure.
    pub fn monthly(value: Decimal) -> Self {
        Self {
            value,
            unit: GrossUnit::Monthly,
        }
    }

    /// Creates a gross amount entered as a yearly figure.
    pub fn yearly(value: Decimal) -> Self {
        Self {
            value,
            unit: GrossUnit::Yearly,
        }
    }

    /// The unit the amount was entered in.
    pub fn edited_unit(&self) -> GrossUnit {
        self.unit
    }

    /// The amount exactly as entered.
    pub fn entered_value(&self) -> Decimal {
        self.value
    }

    /// The monthly figure.
    pub fn to_monthly(&self) -> Decimal {
        match self.unit {
            GrossUnit::Monthly => self.value,
            GrossUnit::Yearly => monthly_from_yearly(self.value),
        }
    }

    /// The yearly figure.
    pub fn to_yearly(&self) -> Decimal {
        match self.unit {
            GrossUnit::Monthly => annualise(self.value),
            GrossUnit::Yearly => self.value,
        }
    }

    /// Returns true if the monthly figure is at or below [`MAX_GROSS_MONTHLY`].
    pub fn is_within_limit(&self) -> bool {
        self.to_monthly() <= MAX_GROSS_MONTHLY
    }

    /// Returns true if the amount is zero in either unit.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_max_gross_is_ten_to_the_fifteenth() {
        assert_eq!(MAX_GROSS_MONTHLY, dec("1000000000000000"));
    }

    #[test]
    fn test_limit_applies_to_monthly_figure() {
        assert!(GrossAmount::monthly(MAX_GROSS_MONTHLY).is_within_limit());
        assert!(!GrossAmount::monthly(dec("1000000000000000.01")).is_within_limit());
        assert!(GrossAmount::yearly(dec("12000000000000000")).is_within_limit());
        assert!(!GrossAmount::yearly(dec("12000000000000012")).is_within_limit());
        assert!(!GrossAmount::monthly(dec("10000000000000000000000000000")).is_within_limit());
    }

    #[test]
    fn test_monthly_entry_derives_yearly() {
        let gross = GrossAmount::monthly(dec("20000"));
        assert_eq!(gross.to_monthly(), dec("20000"));
        assert_eq!(gross.to_yearly(), dec("240000"));
        assert_eq!(gross.edited_unit(), GrossUnit::Monthly);
    }

    #[test]
    fn test_yearly_entry_is_kept_exactly() {
        // 100000 / 12 does not terminate; the yearly figure must not drift.
        let gross = GrossAmount::yearly(dec("100000"));
        assert_eq!(gross.to_yearly(), dec("100000"));
        assert_eq!(gross.to_monthly().round_dp(2), dec("8333.33"));
    }

    #[test]
    fn test_monthly_entry_with_fraction() {
        let gross = GrossAmount::monthly(dec("1234.56"));
        assert_eq!(gross.to_yearly(), dec("14814.72"));
    }

    #[test]
    fn test_zero_detection() {
        assert!(GrossAmount::monthly(Decimal::ZERO).is_zero());
        assert!(GrossAmount::yearly(Decimal::ZERO).is_zero());
        assert!(!GrossAmount::yearly(dec("0.01")).is_zero());
    }

    #[test]
    fn test_serializes_unit_in_snake_case() {
        let json = serde_json::to_value(GrossAmount::yearly(dec("12"))).unwrap();
        assert_eq!(json["unit"], "yearly");
        assert_eq!(json["value"], "12");
    }
}
