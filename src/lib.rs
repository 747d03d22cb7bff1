//! Salary Breakup Engine
//!
//! This crate derives a salary breakup from a gross amount and a named
//! compensation template: per-component earnings, employee PF and ESIC
//! deductions, employer contributions, net pay and cost-to-company.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
