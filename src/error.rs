//! Error types for the Vacation Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading tax tables or
//! computing a vacation payout.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Vacation Payroll Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use vacation_payroll_engine::error::EngineError;
///
/// let error = EngineError::ValidationError {
///     field: "monthly_salary".to_string(),
///     message: "must not be negative".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid input field 'monthly_salary': must not be negative"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A calculation input was malformed. Raised before any computation begins.
    #[error("Invalid input field '{field}': {message}")]
    ValidationError {
        /// The input field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Configuration file or directory was not found at the specified path.
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

    /// A bracket table violated its ordering or coverage invariants.
    #[error("Invalid tax table '{table}': {message}")]
    InvalidTaxTable {
        /// The name of the offending table (e.g. "inss").
        table: String,
        /// A description of the violated invariant.
        message: String,
    },

    /// No tax table set is effective on the requested date.
    #[error("No tax table effective on {date}")]
    TaxTableNotFound {
        /// The reference date that had no effective table set.
        date: NaiveDate,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    /// Builds a [`EngineError::ValidationError`] for the given field.
    pub(crate) fn validation(field: &str, message: impl Into<String>) -> Self {
        EngineError::ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Builds a [`EngineError::InvalidTaxTable`] for the given table.
    pub(crate) fn invalid_table(table: &str, message: impl Into<String>) -> Self {
        EngineError::InvalidTaxTable {
            table: table.to_string(),
            message: message.into(),
        }
    }
}
