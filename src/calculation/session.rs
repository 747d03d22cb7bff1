//! Interactive breakup session.
//!
//! Holds the current template and gross amount the way a form does. Every
//! input is a discrete edit event; the breakup is recomputed from scratch on
//! demand, so there is nothing to keep in sync and no edit can trigger
//! another one.

use rust_decimal::Decimal;

use crate::config::{CompensationTemplate, ConfigLoader, StatutoryConfig};
use crate::error::EngineResult;
use crate::models::{GrossAmount, SalaryBreakup};

use super::breakup::calculate_breakup;

/// The current (template, gross) selection.
///
/// # Examples
///
/// ```no_run
/// use salary_breakup::calculation::BreakupSession;
/// use salary_breakup::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// let mut session = BreakupSession::new(*loader.statutory());
///
/// session.select_template(&loader, "Template 1")?;
/// session.set_gross_yearly(Decimal::new(240000, 0));
/// assert_eq!(session.gross_monthly(), Some(Decimal::new(20000, 0)));
///
/// let breakup = session.breakup().unwrap();
/// assert_eq!(breakup.summary.yearly_ctc, Decimal::new(263400, 0));
/// # Ok::<(), salary_breakup::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BreakupSession {
    statutory: StatutoryConfig,
    template: Option<CompensationTemplate>,
    gross: Option<GrossAmount>,
}

impl BreakupSession {
    /// Creates an empty session with the given statutory ceilings.
    pub fn new(statutory: StatutoryConfig) -> Self {
        Self {
            statutory,
            template: None,
            gross: None,
        }
    }

    /// Selects a template by name from the catalogue.
    ///
    /// On `TemplateNotFound` the previous selection is left untouched.
    pub fn select_template(
        &mut self,
        catalogue: &ConfigLoader,
        name: &str,
    ) -> EngineResult<&CompensationTemplate> {
        let template = catalogue.get_template(name)?.clone();
        Ok(self.template.insert(template))
    }

    /// Sets the gross from a monthly figure.
    pub fn set_gross_monthly(&mut self, amount: Decimal) {
        self.gross = Some(GrossAmount::monthly(amount));
    }

    /// Sets the gross from a yearly figure.
    pub fn set_gross_yearly(&mut self, amount: Decimal) {
        self.gross = Some(GrossAmount::yearly(amount));
    }

    /// Clears the gross amount.
    pub fn clear_gross(&mut self) {
        self.gross = None;
    }

    /// The selected template, if any.
    pub fn template(&self) -> Option<&CompensationTemplate> {
        self.template.as_ref()
    }

    /// The current gross, if any.
    pub fn gross(&self) -> Option<GrossAmount> {
        self.gross
    }

    /// The monthly gross, derived if the yearly figure was entered.
    pub fn gross_monthly(&self) -> Option<Decimal> {
        self.gross.map(|g| g.to_monthly())
    }

    /// The yearly gross, derived if the monthly figure was entered.
    pub fn gross_yearly(&self) -> Option<Decimal> {
        self.gross.map(|g| g.to_yearly())
    }

    /// The statutory ceilings this session computes with.
    pub fn statutory(&self) -> &StatutoryConfig {
        &self.statutory
    }

    /// Computes the breakup for the current selection.
    ///
    /// Returns `None` until a template has been selected.
    pub fn breakup(&self) -> Option<SalaryBreakup> {
        self.template
            .as_ref()
            .map(|t| calculate_breakup(t, self.gross, &self.statutory))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::GrossUnit;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn catalogue() -> ConfigLoader {
        ConfigLoader::load("./config/default").unwrap()
    }

    #[test]
    fn test_no_breakup_before_template_selected() {
        let mut session = BreakupSession::new(StatutoryConfig::default());
        session.set_gross_monthly(dec("20000"));
        assert!(session.breakup().is_none());
    }

    #[test]
    fn test_select_template_and_compute() {
        let loader = catalogue();
        let mut session = BreakupSession::new(*loader.statutory());

        let selected = session.select_template(&loader, "Template 1").unwrap();
        assert_eq!(selected.name, "Template 1");

        session.set_gross_monthly(dec("20000"));
        let breakup = session.breakup().unwrap();

        assert_eq!(breakup.template_name, "Template 1");
        assert_eq!(breakup.summary.net_pay, dec("17550"));
        assert_eq!(breakup.summary.yearly_ctc, dec("263400"));
    }

    #[test]
    fn test_unknown_template_keeps_previous_selection() {
        let loader = catalogue();
        let mut session = BreakupSession::new(*loader.statutory());
        session.select_template(&loader, "Template 2").unwrap();

        let result = session.select_template(&loader, "Template 9");

        assert!(matches!(result, Err(EngineError::TemplateNotFound { .. })));
        assert_eq!(session.template().unwrap().name, "Template 2");
    }

    #[test]
    fn test_monthly_edit_derives_yearly() {
        let mut session = BreakupSession::new(StatutoryConfig::default());
        session.set_gross_monthly(dec("20000"));

        assert_eq!(session.gross_yearly(), Some(dec("240000")));
        assert_eq!(session.gross().unwrap().edited_unit(), GrossUnit::Monthly);
    }

    #[test]
    fn test_yearly_edit_derives_monthly() {
        let mut session = BreakupSession::new(StatutoryConfig::default());
        session.set_gross_yearly(dec("300000"));

        assert_eq!(session.gross_monthly(), Some(dec("25000")));
        assert_eq!(session.gross().unwrap().edited_unit(), GrossUnit::Yearly);
    }

    #[test]
    fn test_alternating_edits_converge() {
        let mut session = BreakupSession::new(StatutoryConfig::default());

        session.set_gross_yearly(dec("100000"));
        let monthly = session.gross_monthly().unwrap();
        session.set_gross_monthly(monthly);
        let yearly = session.gross_yearly().unwrap();
        session.set_gross_yearly(yearly);

        assert_eq!(session.gross_monthly(), Some(monthly));
        assert_eq!(session.gross_yearly(), Some(yearly));
    }

    #[test]
    fn test_switching_template_recomputes_everything() {
        let loader = catalogue();
        let mut session = BreakupSession::new(*loader.statutory());
        session.set_gross_monthly(dec("20000"));

        session.select_template(&loader, "Template 1").unwrap();
        let first = session.breakup().unwrap();
        session.select_template(&loader, "Template 2").unwrap();
        let second = session.breakup().unwrap();

        assert_eq!(first.earnings[2].name, "Other Allowance");
        assert_eq!(second.earnings[2].name, "Special Allowance");
        // Template 2: Basic 12000, HRA 3600, Special 2000; PF base 14000
        assert_eq!(second.statutory[0].employee_amount, dec("1680"));
    }

    #[test]
    fn test_clear_gross_empties_breakup() {
        let loader = catalogue();
        let mut session = BreakupSession::new(*loader.statutory());
        session.select_template(&loader, "Template 1").unwrap();
        session.set_gross_monthly(dec("20000"));
        session.clear_gross();

        let breakup = session.breakup().unwrap();
        assert!(breakup.earnings.is_empty());
        assert_eq!(breakup.summary.net_pay, Decimal::ZERO);
    }
}
