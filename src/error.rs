//! Error types for the Pay-Period and Holiday Calendar Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during calendar resolution.

use thiserror::Error;

/// The main error type for the Pay-Period and Holiday Calendar Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application. Every
/// variant is a deterministic validation failure; there is nothing to retry.
///
/// # Example
///
/// ```
/// use payroll_calendar::error::EngineError;
///
/// let error = EngineError::InvalidHolidayYear { year: -1 };
/// assert_eq!(error.to_string(), "Invalid year for holiday resolution: -1");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Holiday configuration string was empty or whitespace-only.
    #[error("Holiday configuration is empty")]
    EmptyHolidayConfig,

    /// Holiday configuration did not match either grammar form.
    #[error("Unparseable holiday configuration: '{config}'")]
    UnparseableHolidayConfig {
        /// The configuration text that failed to parse.
        config: String,
    },

    /// Holiday resolution was requested for a non-positive year.
    #[error("Invalid year for holiday resolution: {year}")]
    InvalidHolidayYear {
        /// The year that was rejected.
        year: i32,
    },

    /// A pay period value violated its span invariants.
    #[error("Invalid pay period: {message}")]
    InvalidPayPeriod {
        /// A description of the violated invariant.
        message: String,
    },

    /// A holiday record was invalid or contained inconsistent data.
    #[error("Invalid holiday: {message}")]
    InvalidHoliday {
        /// A description of what made the holiday invalid.
        message: String,
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
}

impl EngineError {
    /// Returns true if this error is a holiday configuration failure
    /// (empty, unparseable, or invalid-year).
    ///
    /// Calling layers map this class of failure directly to a caller-visible
    /// "invalid holiday configuration" condition.
    pub fn is_holiday_config_error(&self) -> bool {
        matches!(
            self,
            EngineError::EmptyHolidayConfig
                | EngineError::UnparseableHolidayConfig { .. }
                | EngineError::InvalidHolidayYear { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
