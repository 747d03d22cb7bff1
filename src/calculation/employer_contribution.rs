//! Employer-side statutory contribution calculation.
//!
//! Mirrors the employee deduction pass with the employer share percentage.
//! The PF base, PF ceiling and ESIC threshold are the same ones the employee
//! side uses.

use crate::config::CompensationTemplate;

use super::deductions::{StatutoryResult, calculate_statutory};
use super::statutory::{ContributionSide, StatutoryContext, StatutoryRuleSet};

/// Computes the employer-side contribution for every supported component.
pub fn calculate_employer_contributions(
    template: &CompensationTemplate,
    ctx: &StatutoryContext<'_>,
    rules: &StatutoryRuleSet,
    step_number: u32,
) -> StatutoryResult {
    calculate_statutory(ContributionSide::Employer, template, ctx, rules, step_number)
}
