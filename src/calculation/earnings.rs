//! Earning breakdown calculation.
//!
//! Resolves every earning component of a template to a monthly amount. All
//! components are a percentage of gross except HRA, which is a percentage of
//! the Basic amount.

use rust_decimal::Decimal;

use crate::config::CompensationTemplate;
use crate::models::{AuditStep, EarningAmounts};

use super::amount::amount_from_percentage;

/// The result of an earning breakdown, including the amounts and audit step.
#[derive(Debug, Clone)]
pub struct EarningBreakdownResult {
    /// Monthly amount per earning component, in template order.
    pub amounts: EarningAmounts,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the monthly amount of every earning component.
///
/// HRA (matched case-insensitively) is computed against the Basic amount
/// rather than gross. A template without a Basic component yields an HRA of
/// zero.
///
/// # Examples
///
/// ```
/// use salary_breakup::calculation::calculate_earnings;
/// use salary_breakup::config::{CompensationTemplate, EarningComponent};
/// use rust_decimal::Decimal;
///
/// let template = CompensationTemplate {
///     name: "Example".to_string(),
///     earning_components: vec![
///         EarningComponent { name: "Basic".to_string(), percentage: Decimal::new(50, 0) },
///         EarningComponent { name: "HRA".to_string(), percentage: Decimal::new(40, 0) },
///     ],
///     deduction_components: vec![],
/// };
///
/// let result = calculate_earnings(&template, Decimal::new(10000, 0), 1);
/// assert_eq!(result.amounts.get("Basic"), Some(Decimal::new(5000, 0)));
/// assert_eq!(result.amounts.get("HRA"), Some(Decimal::new(2000, 0)));
/// ```
pub fn calculate_earnings(
    template: &CompensationTemplate,
    gross_monthly: Decimal,
    step_number: u32,
) -> EarningBreakdownResult {
    let basic_percentage = template
        .basic()
        .map(|c| c.percentage)
        .unwrap_or(Decimal::ZERO);
    let basic_amount = amount_from_percentage(basic_percentage, gross_monthly);

    let mut amounts = EarningAmounts::default();
    let mut lines = Vec::with_capacity(template.earning_components.len());

    for component in &template.earning_components {
        let (base, base_name) = if component.is_hra() {
            (basic_amount, "basic")
        } else {
            (gross_monthly, "gross")
        };
        let amount = amount_from_percentage(component.percentage, base);

        lines.push(format!(
            "{} = {}% of {} ₹{} = ₹{}",
            component.name,
            component.percentage.normalize(),
            base_name,
            base.normalize(),
            amount.normalize()
        ));
        amounts.insert(component.name.clone(), amount);
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "earning_breakdown".to_string(),
        rule_name: "Earning Breakdown".to_string(),
        input: serde_json::json!({
            "template": template.name,
            "gross_monthly": gross_monthly.to_string(),
            "basic_percentage": basic_percentage.to_string(),
        }),
        output: serde_json::to_value(&amounts).unwrap_or(serde_json::Value::Null),
        reasoning: if lines.is_empty() {
            "Template has no earning components".to_string()
        } else {
            lines.join("; ")
        },
    };

    EarningBreakdownResult {
        amounts,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EarningComponent;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn component(name: &str, percentage: &str) -> EarningComponent {
        EarningComponent {
            name: name.to_string(),
            percentage: dec(percentage),
        }
    }

    fn template(components: Vec<EarningComponent>) -> CompensationTemplate {
        CompensationTemplate {
            name: "Test".to_string(),
            earning_components: components,
            deduction_components: vec![],
        }
    }

    #[test]
    fn test_hra_is_percentage_of_basic() {
        let t = template(vec![component("Basic", "50"), component("HRA", "40")]);
        let result = calculate_earnings(&t, dec("10000"), 1);

        assert_eq!(result.amounts.get("Basic"), Some(dec("5000")));
        assert_eq!(result.amounts.get("HRA"), Some(dec("2000")));
    }

    #[test]
    fn test_template_1_at_20000() {
        let t = template(vec![
            component("Basic", "50"),
            component("HRA", "40"),
            component("Other Allowance", "30"),
        ]);
        let result = calculate_earnings(&t, dec("20000"), 1);

        assert_eq!(result.amounts.get("Basic"), Some(dec("10000")));
        assert_eq!(result.amounts.get("HRA"), Some(dec("4000")));
        assert_eq!(result.amounts.get("Other Allowance"), Some(dec("6000")));
    }

    #[test]
    fn test_hra_matched_case_insensitively() {
        let t = template(vec![component("basic", "60"), component("hra", "30")]);
        let result = calculate_earnings(&t, dec("10000"), 1);

        // 30% of 6000, not of 10000
        assert_eq!(result.amounts.get("hra"), Some(dec("1800")));
    }

    #[test]
    fn test_hra_is_zero_without_basic() {
        let t = template(vec![component("HRA", "40"), component("Special", "10")]);
        let result = calculate_earnings(&t, dec("10000"), 1);

        assert_eq!(result.amounts.get("HRA"), Some(Decimal::ZERO));
        assert_eq!(result.amounts.get("Special"), Some(dec("1000")));
    }

    #[test]
    fn test_hra_listed_before_basic_still_uses_basic() {
        let t = template(vec![component("HRA", "40"), component("Basic", "50")]);
        let result = calculate_earnings(&t, dec("10000"), 1);

        assert_eq!(result.amounts.get("HRA"), Some(dec("2000")));
    }

    #[test]
    fn test_every_component_present_in_order() {
        let t = template(vec![
            component("Basic", "60"),
            component("HRA", "30"),
            component("Special Allowance", "10"),
        ]);
        let result = calculate_earnings(&t, dec("30000"), 1);

        let names: Vec<&str> = result.amounts.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Basic", "HRA", "Special Allowance"]);
    }

    #[test]
    fn test_audit_step_records_inputs() {
        let t = template(vec![component("Basic", "50"), component("HRA", "40")]);
        let result = calculate_earnings(&t, dec("10000"), 3);

        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.rule_id, "earning_breakdown");
        assert_eq!(result.audit_step.input["gross_monthly"], "10000");
        assert!(result.audit_step.reasoning.contains("HRA = 40% of basic ₹5000 = ₹2000"));
    }
}
