//! Breakup result models for the Salary Breakup Engine.
//!
//! This module contains the [`SalaryBreakup`] type and the row, summary,
//! chart and audit structures it is made of. These are the view models the
//! presentation layer consumes; the engine never reads them back.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::round2;

/// A single earning row for display.
///
/// # Example
///
/// ```
/// use salary_breakup::models::EarningRow;
/// use rust_decimal::Decimal;
///
/// let row = EarningRow {
///     name: "Basic".to_string(),
///     percentage_label: "50%".to_string(),
///     monthly_amount: Decimal::new(10000, 0),
///     yearly_amount: Decimal::new(120000, 0),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningRow {
    /// The component name as configured.
    pub name: String,
    /// The configured percentage, e.g. "40%".
    pub percentage_label: String,
    /// The monthly amount.
    pub monthly_amount: Decimal,
    /// The monthly amount times twelve.
    pub yearly_amount: Decimal,
}

/// A single statutory row for display, either employee or employer side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionRow {
    /// The deduction name ("PF" or "ESIC").
    pub name: String,
    /// The share percentage applied, e.g. "3.25%".
    pub percentage_label: String,
    /// The monthly amount.
    pub monthly_amount: Decimal,
    /// The monthly amount times twelve.
    pub yearly_amount: Decimal,
}

/// Employee and employer amounts for one statutory deduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionResult {
    /// The deduction name.
    pub name: String,
    /// Amount deducted from the employee each month.
    pub employee_amount: Decimal,
    /// Amount contributed by the employer each month.
    pub employer_amount: Decimal,
    /// Employee share label, e.g. "12%".
    pub employee_percentage_label: String,
    /// Employer share label, e.g. "12%".
    pub employer_percentage_label: String,
}

/// Aggregated totals for a breakup.
///
/// All amounts are monthly except `yearly_ctc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Sum of employee-side statutory deductions.
    pub total_deduction: Decimal,
    /// Sum of employer-side statutory contributions.
    pub total_employer_contribution: Decimal,
    /// Gross minus total deduction.
    pub net_pay: Decimal,
    /// Gross plus employer contributions.
    pub monthly_ctc: Decimal,
    /// Monthly CTC times twelve.
    pub yearly_ctc: Decimal,
}

impl Summary {
    /// A summary with every figure at zero.
    pub fn zero() -> Self {
        let zero = round2(Decimal::ZERO);
        Self {
            total_deduction: zero,
            total_employer_contribution: zero,
            net_pay: zero,
            monthly_ctc: zero,
            yearly_ctc: zero,
        }
    }
}

/// Parallel label and value arrays for charting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Upper-cased component and deduction names.
    pub labels: Vec<String>,
    /// Monthly amounts, index-aligned with `labels`.
    pub values: Vec<Decimal>,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag configuration the engine accepted but did not act on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a breakup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a salary breakup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakup {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The template the breakup was computed from.
    pub template_name: String,
    /// Monthly gross, zero when no gross was given.
    pub gross_monthly: Decimal,
    /// Yearly gross, zero when no gross was given.
    pub gross_yearly: Decimal,
    /// Earning rows in template order.
    pub earnings: Vec<EarningRow>,
    /// Employee-side statutory deductions.
    pub deductions: Vec<DeductionRow>,
    /// Employer-side statutory contributions.
    pub employer_contributions: Vec<DeductionRow>,
    /// Both sides of each statutory deduction.
    pub statutory: Vec<DeductionResult>,
    /// Aggregated totals.
    pub summary: Summary,
    /// Chart data over earnings and employee deductions.
    pub chart: ChartSeries,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
