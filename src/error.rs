//! Error types for the Leave Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while calculating leave.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Leave Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
/// use chrono::NaiveDate;
///
/// let error = EngineError::InvalidRange {
///     start: NaiveDate::from_ymd_opt(2025, 9, 12).unwrap(),
///     end: NaiveDate::from_ymd_opt(2025, 9, 10).unwrap(),
/// };
/// assert_eq!(error.to_string(), "Invalid date range: start 2025-09-12 is after end 2025-09-10");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The start date of a range is after its end date.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

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

    /// Leave type code was not found in the configuration.
    #[error("Leave type not found: {code}")]
    LeaveTypeNotFound {
        /// The leave type code that was not found.
        code: String,
    },

    /// No approval rule of the leave type covers the requested day count.
    #[error("No approval chain for leave type '{leave_type}' covering {days} days")]
    ApprovalChainNotFound {
        /// The leave type code.
        leave_type: String,
        /// The chargeable day count that was not covered.
        days: Decimal,
    },

    /// A request field was invalid.
    #[error("Invalid request field '{field}': {message}")]
    InvalidRequest {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
