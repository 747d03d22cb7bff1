//! Configuration types for salary breakup.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Name of the earning component every other rule keys off.
pub const BASIC_COMPONENT: &str = "Basic";

/// Name of the house rent allowance component, derived from Basic.
pub const HRA_COMPONENT: &str = "HRA";

/// Statutory wage ceilings.
///
/// Both limits are monthly amounts. They are fixed for the lifetime of a
/// loaded configuration and can be replaced for a different jurisdiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryConfig {
    /// PF wage ceiling. A PF base above it is capped to it.
    pub pf_employee_limit: Decimal,
    /// ESIC eligibility ceiling. Gross above it pays no ESIC at all.
    pub esic_employee_limit: Decimal,
}

impl Default for StatutoryConfig {
    fn default() -> Self {
        Self {
            pf_employee_limit: Decimal::new(15000, 0),
            esic_employee_limit: Decimal::new(21000, 0),
        }
    }
}

/// An earning line in a compensation template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningComponent {
    /// Display name of the component (e.g., "Basic", "HRA").
    pub name: String,
    /// Percentage of gross, or of Basic for HRA.
    pub percentage: Decimal,
}

impl EarningComponent {
    /// Returns true if this is the Basic component (case-insensitive).
    pub fn is_basic(&self) -> bool {
        self.name.eq_ignore_ascii_case(BASIC_COMPONENT)
    }

    /// Returns true if this is the HRA component (case-insensitive).
    pub fn is_hra(&self) -> bool {
        self.name.eq_ignore_ascii_case(HRA_COMPONENT)
    }
}

/// A statutory deduction line in a compensation template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionComponent {
    /// Deduction name. Only "PF" and "ESIC" are computed.
    pub name: String,
    /// Percentage deducted from the employee.
    pub employee_share_percentage: Decimal,
    /// Percentage contributed by the employer.
    pub employer_share_percentage: Decimal,
}

/// A named set of earning and statutory deduction rules.
///
/// # Example
///
/// ```
/// use salary_breakup::config::CompensationTemplate;
///
/// let yaml = r#"
/// name: Template 1
/// earning_components:
///   - { name: Basic, percentage: 50 }
///   - { name: HRA, percentage: 40 }
/// deduction_components:
///   - { name: PF, employee_share_percentage: 12, employer_share_percentage: 12 }
/// "#;
/// let template: CompensationTemplate = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(template.name, "Template 1");
/// assert!(template.basic().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationTemplate {
    /// Unique template name.
    pub name: String,
    /// Earning components in display order.
    #[serde(default)]
    pub earning_components: Vec<EarningComponent>,
    /// Statutory deduction components in display order.
    #[serde(default)]
    pub deduction_components: Vec<DeductionComponent>,
}

impl CompensationTemplate {
    /// Returns the Basic earning component, if the template has one.
    pub fn basic(&self) -> Option<&EarningComponent> {
        self.earning_components.iter().find(|c| c.is_basic())
    }

    /// Returns the earning component with the given name.
    pub fn earning(&self, name: &str) -> Option<&EarningComponent> {
        self.earning_components.iter().find(|c| c.name == name)
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
    fn test_default_statutory_limits() {
        let config = StatutoryConfig::default();
        assert_eq!(config.pf_employee_limit, dec("15000"));
        assert_eq!(config.esic_employee_limit, dec("21000"));
    }

    #[test]
    fn test_component_name_matching_is_case_insensitive() {
        let hra = EarningComponent {
            name: "hra".to_string(),
            percentage: dec("40"),
        };
        let basic = EarningComponent {
            name: "BASIC".to_string(),
            percentage: dec("50"),
        };
        assert!(hra.is_hra());
        assert!(!hra.is_basic());
        assert!(basic.is_basic());
    }

    #[test]
    fn test_template_deserializes_fractional_percentages() {
        let yaml = r#"
name: Template 1
earning_components:
  - name: Basic
    percentage: 50
deduction_components:
  - name: ESIC
    employee_share_percentage: 3.25
    employer_share_percentage: 0.75
"#;
        let template: CompensationTemplate = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(template.deduction_components[0].employee_share_percentage, dec("3.25"));
        assert_eq!(template.deduction_components[0].employer_share_percentage, dec("0.75"));
    }

    #[test]
    fn test_template_without_basic() {
        let template = CompensationTemplate {
            name: "No Basic".to_string(),
            earning_components: vec![EarningComponent {
                name: "HRA".to_string(),
                percentage: dec("40"),
            }],
            deduction_components: vec![],
        };
        assert!(template.basic().is_none());
        assert!(template.earning("HRA").is_some());
    }
}
