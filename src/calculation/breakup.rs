//! The full breakup pipeline.
//!
//! Runs earning breakdown, both statutory passes and aggregation in order
//! and assembles the view model the presentation layer renders.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::{CompensationTemplate, StatutoryConfig};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, ChartSeries, DeductionResult, DeductionRow, EarningRow,
    GrossAmount, SalaryBreakup, Summary,
};

use super::aggregate::aggregate;
use super::amount::{annualise, percentage_label};
use super::deductions::{StatutoryResult, calculate_employee_deductions};
use super::earnings::calculate_earnings;
use super::employer_contribution::calculate_employer_contributions;
use super::statutory::{StatutoryContext, StatutoryRuleSet};

/// Computes the complete salary breakup for a template and gross.
///
/// An absent or zero gross produces empty rows and a zero summary. The
/// result is a pure function of the inputs apart from its id, timestamp and
/// duration.
///
/// # Examples
///
/// ```no_run
/// use salary_breakup::calculation::calculate_breakup;
/// use salary_breakup::config::ConfigLoader;
/// use salary_breakup::models::GrossAmount;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// let template = loader.get_template("Template 1")?;
/// let breakup = calculate_breakup(
///     template,
///     Some(GrossAmount::monthly(Decimal::new(20000, 0))),
///     loader.statutory(),
/// );
/// assert_eq!(breakup.summary.net_pay, Decimal::new(17550, 0));
/// # Ok::<(), salary_breakup::error::EngineError>(())
/// ```
pub fn calculate_breakup(
    template: &CompensationTemplate,
    gross: Option<GrossAmount>,
    config: &StatutoryConfig,
) -> SalaryBreakup {
    let start_time = Instant::now();
    let rules = StatutoryRuleSet::standard(config);

    let warnings: Vec<AuditWarning> = rules
        .unsupported(template)
        .map(|c| AuditWarning {
            code: "UNSUPPORTED_DEDUCTION".to_string(),
            message: format!(
                "Deduction '{}' has no statutory rule and was not computed",
                c.name
            ),
            severity: "low".to_string(),
        })
        .collect();

    let gross = gross.filter(|g| !g.is_zero());
    let Some(gross) = gross else {
        return SalaryBreakup {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            template_name: template.name.clone(),
            gross_monthly: Decimal::ZERO,
            gross_yearly: Decimal::ZERO,
            earnings: vec![],
            deductions: vec![],
            employer_contributions: vec![],
            statutory: vec![],
            summary: Summary::zero(),
            chart: ChartSeries::default(),
            audit_trace: AuditTrace {
                steps: vec![],
                warnings,
                duration_us: start_time.elapsed().as_micros() as u64,
            },
        };
    };

    let gross_monthly = gross.to_monthly();
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut step_number: u32 = 1;

    let earning_result = calculate_earnings(template, gross_monthly, step_number);
    steps.push(earning_result.audit_step);
    step_number += 1;

    let ctx = StatutoryContext {
        gross_monthly,
        earnings: &earning_result.amounts,
    };

    let deductions = calculate_employee_deductions(template, &ctx, &rules, step_number);
    step_number += deductions.audit_steps.len() as u32;
    steps.extend(deductions.audit_steps.iter().cloned());

    let contributions = calculate_employer_contributions(template, &ctx, &rules, step_number);
    step_number += contributions.audit_steps.len() as u32;
    steps.extend(contributions.audit_steps.iter().cloned());

    let aggregation = aggregate(gross_monthly, &deductions, &contributions, step_number);
    steps.push(aggregation.audit_step);

    let earnings: Vec<EarningRow> = earning_result
        .amounts
        .iter()
        .map(|(name, amount)| EarningRow {
            name: name.to_string(),
            percentage_label: template
                .earning(name)
                .map(|c| percentage_label(c.percentage))
                .unwrap_or_else(|| "-".to_string()),
            monthly_amount: amount,
            yearly_amount: annualise(amount),
        })
        .collect();

    let employee_rows = statutory_rows(&deductions);
    let employer_rows = statutory_rows(&contributions);
    let chart = chart_series(&earnings, &employee_rows);

    SalaryBreakup {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        template_name: template.name.clone(),
        gross_monthly,
        gross_yearly: gross.to_yearly(),
        earnings,
        deductions: employee_rows,
        employer_contributions: employer_rows,
        statutory: combine_sides(&deductions, &contributions),
        summary: aggregation.summary,
        chart,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    }
}

fn statutory_rows(result: &StatutoryResult) -> Vec<DeductionRow> {
    result
        .lines
        .iter()
        .map(|line| DeductionRow {
            name: line.name.clone(),
            percentage_label: line.percentage_label.clone(),
            monthly_amount: line.amount,
            yearly_amount: annualise(line.amount),
        })
        .collect()
}

/// Pairs employee and employer lines by position. Both passes walk the
/// same components with the same rules, so the lines always align.
fn combine_sides(employee: &StatutoryResult, employer: &StatutoryResult) -> Vec<DeductionResult> {
    employee
        .lines
        .iter()
        .zip(&employer.lines)
        .map(|(e, r)| DeductionResult {
            name: e.name.clone(),
            employee_amount: e.amount,
            employer_amount: r.amount,
            employee_percentage_label: e.percentage_label.clone(),
            employer_percentage_label: r.percentage_label.clone(),
        })
        .collect()
}

/// Builds chart data over every earning and employee deduction amount.
pub fn chart_series(earnings: &[EarningRow], deductions: &[DeductionRow]) -> ChartSeries {
    let (labels, values) = earnings
        .iter()
        .map(|r| (r.name.to_uppercase(), r.monthly_amount))
        .chain(
            deductions
                .iter()
                .map(|r| (r.name.to_uppercase(), r.monthly_amount)),
        )
        .unzip();

    ChartSeries { labels, values }
}
