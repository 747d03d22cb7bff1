//! Aggregation of earnings, deductions and contributions into totals.

use rust_decimal::Decimal;

use crate::models::{AuditStep, Summary};

use super::amount::{annualise, round2};
use super::deductions::StatutoryResult;

/// The result of aggregation, including the summary and audit step.
#[derive(Debug, Clone)]
pub struct AggregationResult {
    /// The computed totals.
    pub summary: Summary,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Combines the statutory passes into net pay and cost-to-company.
///
/// Yearly CTC is monthly CTC times twelve. No ceiling or cliff is
/// re-evaluated at yearly granularity.
pub fn aggregate(
    gross_monthly: Decimal,
    deductions: &StatutoryResult,
    contributions: &StatutoryResult,
    step_number: u32,
) -> AggregationResult {
    let total_deduction = deductions.total();
    let total_employer_contribution = contributions.total();
    let monthly_ctc = gross_monthly + total_employer_contribution;

    let summary = Summary {
        total_deduction: round2(total_deduction),
        total_employer_contribution: round2(total_employer_contribution),
        net_pay: round2(gross_monthly - total_deduction),
        monthly_ctc: round2(monthly_ctc),
        yearly_ctc: round2(annualise(monthly_ctc)),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "aggregate".to_string(),
        rule_name: "Net Pay and CTC".to_string(),
        input: serde_json::json!({
            "gross_monthly": gross_monthly.to_string(),
            "total_deduction": total_deduction.to_string(),
            "total_employer_contribution": total_employer_contribution.to_string(),
        }),
        output: serde_json::to_value(&summary).unwrap_or(serde_json::Value::Null),
        reasoning: format!(
            "Net pay ₹{} - ₹{} = ₹{}; CTC ₹{} + ₹{} = ₹{} monthly, ₹{} yearly",
            gross_monthly.normalize(),
            total_deduction.normalize(),
            summary.net_pay,
            gross_monthly.normalize(),
            total_employer_contribution.normalize(),
            summary.monthly_ctc,
            summary.yearly_ctc
        ),
    };

    AggregationResult {
        summary,
        audit_step,
    }
}
