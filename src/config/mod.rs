//! Configuration loading and management for the Salary Breakup Engine.
//!
//! This module loads compensation templates and statutory wage ceilings
//! from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use salary_breakup::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Templates: {:?}", config.template_names());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BASIC_COMPONENT, CompensationTemplate, DeductionComponent, EarningComponent, HRA_COMPONENT,
    StatutoryConfig,
};
