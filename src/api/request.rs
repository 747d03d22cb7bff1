//! Request types for the Salary Breakup API.
//!
//! This module defines the JSON request structure for the `/breakup`
//! endpoint and its validation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{GrossAmount, MAX_GROSS_MONTHLY};

use super::response::ApiError;

/// Request body for the `/breakup` endpoint.
///
/// Exactly one of `gross_monthly` and `gross_yearly` must be given; it is
/// the unit the caller edited and the other is derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakupRequest {
    /// The compensation template name.
    pub template: String,
    /// Gross entered per month.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_monthly: Option<Decimal>,
    /// Gross entered per year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_yearly: Option<Decimal>,
}

impl BreakupRequest {
    /// Creates a request with a monthly gross.
    pub fn monthly(template: impl Into<String>, amount: Decimal) -> Self {
        Self {
            template: template.into(),
            gross_monthly: Some(amount),
            gross_yearly: None,
        }
    }

    /// Creates a request with a yearly gross.
    pub fn yearly(template: impl Into<String>, amount: Decimal) -> Self {
        Self {
            template: template.into(),
            gross_monthly: None,
            gross_yearly: Some(amount),
        }
    }

    /// Validates the gross fields and returns the entered amount.
    ///
    /// Negative amounts and monthly figures above [`MAX_GROSS_MONTHLY`] are
    /// rejected here. The engine itself passes negatives through
    /// arithmetically and expects grosses within the limit.
    pub fn gross(&self) -> Result<GrossAmount, ApiError> {
        let gross = match (self.gross_monthly, self.gross_yearly) {
            (Some(monthly), None) => GrossAmount::monthly(monthly),
            (None, Some(yearly)) => GrossAmount::yearly(yearly),
            (Some(_), Some(_)) => {
                return Err(ApiError::validation_error(
                    "Provide only one of gross_monthly and gross_yearly",
                ));
            }
            (None, None) => {
                return Err(ApiError::validation_error(
                    "One of gross_monthly or gross_yearly is required",
                ));
            }
        };

        if gross.entered_value() < Decimal::ZERO {
            return Err(ApiError::validation_error("Gross amount must not be negative"));
        }
        if !gross.is_within_limit() {
            return Err(ApiError::validation_error(format!(
                "Monthly gross must not exceed {}",
                MAX_GROSS_MONTHLY
            )));
        }

        Ok(gross)
    }
}
