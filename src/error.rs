//! Error types for the Salary Breakup Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the error conditions that can occur while loading templates and
//! selecting them. The calculation itself is total and never fails.

use thiserror::Error;

/// The main error type for the Salary Breakup Engine.
///
/// # Example
///
/// ```
/// use salary_breakup::error::EngineError;
///
/// let error = EngineError::TemplateNotFound {
///     name: "Template 9".to_string(),
/// };
/// assert_eq!(error.to_string(), "Compensation template not found: Template 9");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No compensation template with the requested name exists.
    #[error("Compensation template not found: {name}")]
    TemplateNotFound {
        /// The template name that was requested.
        name: String,
    },

    /// Two templates in one catalogue share a name.
    #[error("Duplicate compensation template name: {name}")]
    DuplicateTemplate {
        /// The repeated template name.
        name: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
