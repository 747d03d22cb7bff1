//! Statutory deduction rules.
//!
//! Each statutory deduction is a [`StatutoryRule`] that decides which base a
//! share percentage applies to. Employee and employer amounts are the same
//! rule applied with the two share percentages of a [`DeductionComponent`],
//! so the two sides can never be capped or thresholded differently.
//!
//! The standard rule set recognizes exactly "PF" and "ESIC" by exact name.
//! Any other deduction name configured in a template is not computed.

use std::fmt;

use rust_decimal::Decimal;

use crate::config::{CompensationTemplate, DeductionComponent, StatutoryConfig};
use crate::models::EarningAmounts;

use super::amount::amount_from_percentage;

/// Name of the Provident Fund deduction.
pub const PF_DEDUCTION: &str = "PF";

/// Name of the ESIC deduction.
pub const ESIC_DEDUCTION: &str = "ESIC";

/// Inputs shared by every statutory rule.
#[derive(Debug, Clone, Copy)]
pub struct StatutoryContext<'a> {
    /// Monthly gross.
    pub gross_monthly: Decimal,
    /// Computed monthly earning amounts.
    pub earnings: &'a EarningAmounts,
}

/// Which party a statutory amount is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContributionSide {
    /// Deducted from the employee's gross.
    Employee,
    /// Paid by the employer on top of gross.
    Employer,
}

impl ContributionSide {
    /// The share percentage this side uses.
    pub fn share_percentage(self, component: &DeductionComponent) -> Decimal {
        match self {
            ContributionSide::Employee => component.employee_share_percentage,
            ContributionSide::Employer => component.employer_share_percentage,
        }
    }

    /// Lower-case identifier used in audit rule ids.
    pub fn as_str(self) -> &'static str {
        match self {
            ContributionSide::Employee => "employee",
            ContributionSide::Employer => "employer",
        }
    }
}

/// The base a statutory share percentage is applied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionBase {
    /// The base before any ceiling or eligibility rule.
    pub actual: Decimal,
    /// The base the percentage is actually applied to.
    pub applied: Decimal,
    /// Why `applied` differs from `actual`, or why it doesn't.
    pub reasoning: String,
}

/// A statutory deduction rule.
pub trait StatutoryRule: fmt::Debug + Send + Sync {
    /// The exact deduction name this rule handles.
    fn name(&self) -> &'static str;

    /// Resolves the base both share percentages apply to.
    fn contribution_base(&self, ctx: &StatutoryContext<'_>) -> ContributionBase;

    /// Amount for one side of the deduction.
    fn compute_amount(
        &self,
        side: ContributionSide,
        component: &DeductionComponent,
        ctx: &StatutoryContext<'_>,
    ) -> Decimal {
        amount_from_percentage(
            side.share_percentage(component),
            self.contribution_base(ctx).applied,
        )
    }

    /// Amount deducted from the employee.
    fn compute_employee_amount(
        &self,
        component: &DeductionComponent,
        ctx: &StatutoryContext<'_>,
    ) -> Decimal {
        self.compute_amount(ContributionSide::Employee, component, ctx)
    }

    /// Amount contributed by the employer.
    fn compute_employer_amount(
        &self,
        component: &DeductionComponent,
        ctx: &StatutoryContext<'_>,
    ) -> Decimal {
        self.compute_amount(ContributionSide::Employer, component, ctx)
    }
}

/// Provident Fund.
///
/// The PF base is Basic plus every earning other than Basic and HRA. HRA
/// never counts towards it. A base above the ceiling is replaced by the
/// ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PfRule {
    /// Monthly wage ceiling.
    pub ceiling: Decimal,
}

impl PfRule {
    /// The uncapped PF base.
    pub fn pf_base(earnings: &EarningAmounts) -> Decimal {
        earnings.basic() + earnings.other_than_basic_and_hra()
    }
}

impl StatutoryRule for PfRule {
    fn name(&self) -> &'static str {
        PF_DEDUCTION
    }

    fn contribution_base(&self, ctx: &StatutoryContext<'_>) -> ContributionBase {
        let actual = Self::pf_base(ctx.earnings);
        if actual > self.ceiling {
            tracing::debug!(pf_base = %actual, ceiling = %self.ceiling, "PF base capped at ceiling");
            ContributionBase {
                actual,
                applied: self.ceiling,
                reasoning: format!(
                    "PF base ₹{} exceeds ceiling ₹{}; using ceiling",
                    actual.normalize(),
                    self.ceiling.normalize()
                ),
            }
        } else {
            ContributionBase {
                actual,
                applied: actual,
                reasoning: format!(
                    "PF base ₹{} within ceiling ₹{}",
                    actual.normalize(),
                    self.ceiling.normalize()
                ),
            }
        }
    }
}

/// Employees' State Insurance.
///
/// Applies to the full gross when gross is at or below the ceiling and is
/// exactly zero above it. There is no partial zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EsicRule {
    /// Monthly gross eligibility ceiling.
    pub ceiling: Decimal,
}

impl EsicRule {
    /// Returns true if the gross is eligible for ESIC.
    pub fn is_eligible(&self, gross_monthly: Decimal) -> bool {
        gross_monthly <= self.ceiling
    }
}

impl StatutoryRule for EsicRule {
    fn name(&self) -> &'static str {
        ESIC_DEDUCTION
    }

    fn contribution_base(&self, ctx: &StatutoryContext<'_>) -> ContributionBase {
        let actual = ctx.gross_monthly;
        if self.is_eligible(actual) {
            ContributionBase {
                actual,
                applied: actual,
                reasoning: format!(
                    "Gross ₹{} at or below ESIC ceiling ₹{}",
                    actual.normalize(),
                    self.ceiling.normalize()
                ),
            }
        } else {
            tracing::debug!(gross_monthly = %actual, ceiling = %self.ceiling, "Gross above ESIC ceiling");
            ContributionBase {
                actual,
                applied: Decimal::ZERO,
                reasoning: format!(
                    "Gross ₹{} above ESIC ceiling ₹{}; not applicable",
                    actual.normalize(),
                    self.ceiling.normalize()
                ),
            }
        }
    }
}

/// The statutory rules a breakup is computed with, keyed by exact name.
#[derive(Debug)]
pub struct StatutoryRuleSet {
    rules: Vec<Box<dyn StatutoryRule>>,
}

impl StatutoryRuleSet {
    /// A rule set over the given rules. The first rule matching a name wins.
    pub fn new(rules: Vec<Box<dyn StatutoryRule>>) -> Self {
        Self { rules }
    }

    /// The PF and ESIC rules with the given ceilings.
    pub fn standard(config: &StatutoryConfig) -> Self {
        Self::new(vec![
            Box::new(PfRule {
                ceiling: config.pf_employee_limit,
            }),
            Box::new(EsicRule {
                ceiling: config.esic_employee_limit,
            }),
        ])
    }

    /// Returns the rule for an exact deduction name.
    pub fn get(&self, name: &str) -> Option<&dyn StatutoryRule> {
        self.rules
            .iter()
            .find(|r| r.name() == name)
            .map(|r| &**r)
    }

    /// Deduction components of a template that no rule handles.
    pub fn unsupported<'t>(
        &self,
        template: &'t CompensationTemplate,
    ) -> impl Iterator<Item = &'t DeductionComponent> {
        template
            .deduction_components
            .iter()
            .filter(move |c| self.get(&c.name).is_none())
    }
}
