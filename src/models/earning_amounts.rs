//! Computed earning amounts keyed by component name.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{BASIC_COMPONENT, HRA_COMPONENT};

/// Monthly earning amounts in template order.
///
/// Behaves like an insertion-ordered map: inserting a name that is already
/// present overwrites its amount but keeps its original position.
///
/// # Example
///
/// ```
/// use salary_breakup::models::EarningAmounts;
/// use rust_decimal::Decimal;
///
/// let mut amounts = EarningAmounts::default();
/// amounts.insert("Basic", Decimal::new(5000, 0));
/// amounts.insert("HRA", Decimal::new(2000, 0));
/// assert_eq!(amounts.get("Basic"), Some(Decimal::new(5000, 0)));
/// assert_eq!(amounts.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EarningAmounts {
    entries: Vec<(String, Decimal)>,
}

impl EarningAmounts {
    /// Inserts or overwrites the amount for a component.
    pub fn insert(&mut self, name: impl Into<String>, amount: Decimal) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = amount,
            None => self.entries.push((name, amount)),
        }
    }

    /// Returns the amount for a component by exact name.
    pub fn get(&self, name: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, amount)| *amount)
    }

    /// Iterates over `(name, amount)` pairs in template order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), *a))
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no amounts have been computed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all component amounts.
    pub fn total(&self) -> Decimal {
        self.entries.iter().map(|(_, a)| *a).sum()
    }

    /// Amount of the Basic component (case-insensitive), zero if absent.
    pub fn basic(&self) -> Decimal {
        self.iter()
            .filter(|(n, _)| n.eq_ignore_ascii_case(BASIC_COMPONENT))
            .map(|(_, a)| a)
            .sum()
    }

    /// Sum of every component that is neither Basic nor HRA.
    pub fn other_than_basic_and_hra(&self) -> Decimal {
        self.iter()
            .filter(|(n, _)| {
                !n.eq_ignore_ascii_case(BASIC_COMPONENT) && !n.eq_ignore_ascii_case(HRA_COMPONENT)
            })
            .map(|(_, a)| a)
            .sum()
    }
}
