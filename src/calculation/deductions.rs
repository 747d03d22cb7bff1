//! Employee-side statutory deduction calculation.
//!
//! Walks a template's deduction components and computes each supported one
//! through its [`StatutoryRule`](super::StatutoryRule). Components with no
//! matching rule are skipped, not rejected.

use rust_decimal::Decimal;

use crate::config::CompensationTemplate;
use crate::models::AuditStep;

use super::amount::{amount_from_percentage, percentage_label};
use super::statutory::{ContributionSide, StatutoryContext, StatutoryRuleSet};

/// One computed statutory amount for one side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatutoryLine {
    /// The deduction name.
    pub name: String,
    /// The share percentage applied.
    pub percentage: Decimal,
    /// The share percentage rendered for display.
    pub percentage_label: String,
    /// The monthly amount.
    pub amount: Decimal,
}

/// The result of a statutory pass over one side.
#[derive(Debug, Clone)]
pub struct StatutoryResult {
    /// Computed lines in template order.
    pub lines: Vec<StatutoryLine>,
    /// One audit step per computed line.
    pub audit_steps: Vec<AuditStep>,
}

impl StatutoryResult {
    /// Sum of every line amount.
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(|l| l.amount).sum()
    }
}

/// Computes the employee-side deduction for every supported component.
///
/// # Examples
///
/// ```
/// use salary_breakup::calculation::{
///     StatutoryContext, StatutoryRuleSet, calculate_employee_deductions,
/// };
/// use salary_breakup::config::{CompensationTemplate, DeductionComponent, StatutoryConfig};
/// use salary_breakup::models::EarningAmounts;
/// use rust_decimal::Decimal;
///
/// let template = CompensationTemplate {
///     name: "Example".to_string(),
///     earning_components: vec![],
///     deduction_components: vec![DeductionComponent {
///         name: "PF".to_string(),
///         employee_share_percentage: Decimal::new(12, 0),
///         employer_share_percentage: Decimal::new(12, 0),
///     }],
/// };
/// let mut earnings = EarningAmounts::default();
/// earnings.insert("Basic", Decimal::new(8000, 0));
///
/// let ctx = StatutoryContext { gross_monthly: Decimal::new(10000, 0), earnings: &earnings };
/// let rules = StatutoryRuleSet::standard(&StatutoryConfig::default());
/// let result = calculate_employee_deductions(&template, &ctx, &rules, 1);
/// assert_eq!(result.lines[0].amount, Decimal::new(960, 0));
/// ```
pub fn calculate_employee_deductions(
    template: &CompensationTemplate,
    ctx: &StatutoryContext<'_>,
    rules: &StatutoryRuleSet,
    step_number: u32,
) -> StatutoryResult {
    calculate_statutory(ContributionSide::Employee, template, ctx, rules, step_number)
}

/// Computes one side of every supported statutory deduction.
pub(crate) fn calculate_statutory(
    side: ContributionSide,
    template: &CompensationTemplate,
    ctx: &StatutoryContext<'_>,
    rules: &StatutoryRuleSet,
    step_number: u32,
) -> StatutoryResult {
    let mut lines = Vec::new();
    let mut audit_steps = Vec::new();
    let mut step_number = step_number;

    for component in &template.deduction_components {
        let Some(rule) = rules.get(&component.name) else {
            tracing::debug!(
                deduction = %component.name,
                side = side.as_str(),
                "Skipping unsupported statutory deduction"
            );
            continue;
        };

        let percentage = side.share_percentage(component);
        let base = rule.contribution_base(ctx);
        let amount = amount_from_percentage(percentage, base.applied);
        let label = percentage_label(percentage);

        audit_steps.push(AuditStep {
            step_number,
            rule_id: format!("{}_{}", rule.name().to_lowercase(), side.as_str()),
            rule_name: format!("{} ({})", rule.name(), side.as_str()),
            input: serde_json::json!({
                "gross_monthly": ctx.gross_monthly.to_string(),
                "share_percentage": percentage.to_string(),
                "actual_base": base.actual.to_string(),
            }),
            output: serde_json::json!({
                "applied_base": base.applied.to_string(),
                "amount": amount.to_string(),
            }),
            reasoning: format!(
                "{}; {} of ₹{} = ₹{}",
                base.reasoning,
                label,
                base.applied.normalize(),
                amount.normalize()
            ),
        });
        step_number += 1;

        lines.push(StatutoryLine {
            name: component.name.clone(),
            percentage,
            percentage_label: label,
            amount,
        });
    }

    StatutoryResult { lines, audit_steps }
}
