//! Calculation logic for the Salary Breakup Engine.
//!
//! This module contains the percentage primitive, the earning breakdown,
//! the statutory PF and ESIC rules with their employee and employer passes,
//! aggregation into net pay and cost-to-company, the end-to-end breakup
//! pipeline, and an interactive session over it.

mod aggregate;
mod amount;
mod breakup;
mod deductions;
mod earnings;
mod employer_contribution;
mod session;
mod statutory;

pub use aggregate::{AggregationResult, aggregate};
pub use amount::{
    MONTHS_PER_YEAR, amount_from_percentage, annualise, monthly_from_yearly, percentage_label,
    round2,
};
pub use breakup::{calculate_breakup, chart_series};
pub use deductions::{StatutoryLine, StatutoryResult, calculate_employee_deductions};
pub use earnings::{EarningBreakdownResult, calculate_earnings};
pub use employer_contribution::calculate_employer_contributions;
pub use session::BreakupSession;
pub use statutory::{
    ContributionBase, ContributionSide, ESIC_DEDUCTION, EsicRule, PF_DEDUCTION, PfRule,
    StatutoryContext, StatutoryRule, StatutoryRuleSet,
};
