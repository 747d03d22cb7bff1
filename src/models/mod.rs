//! Core data models for the Salary Breakup Engine.
//!
//! This module contains the domain models used throughout the engine.

mod breakup;
mod earning_amounts;
mod gross;

pub use breakup::{
    AuditStep, AuditTrace, AuditWarning, ChartSeries, DeductionResult, DeductionRow, EarningRow,
    SalaryBreakup, Summary,
};
pub use earning_amounts::EarningAmounts;
pub use gross::{GrossAmount, GrossUnit, MAX_GROSS_MONTHLY};
