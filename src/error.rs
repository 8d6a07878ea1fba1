//! Error types for the office attendance engine.
//!
//! The attendance calculation itself is total and never fails. Errors only
//! arise at the edges: loading configuration, parsing user supplied date keys
//! and months, and reading or writing the persisted store.

use thiserror::Error;

/// The main error type for the office attendance engine.
///
/// # Example
///
/// ```
/// use office_attendance::error::AttendanceError;
///
/// let error = AttendanceError::ConfigNotFound {
///     path: "/missing/settings.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/settings.yaml");
/// ```
#[derive(Debug, Error)]
pub enum AttendanceError {
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

    /// Configuration parsed but holds a value outside its allowed range.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A date key was not a valid `YYYY-MM-DD` calendar date.
    #[error("Invalid date key '{value}': expected YYYY-MM-DD")]
    InvalidDateKey {
        /// The rejected input.
        value: String,
    },

    /// A month was not a valid `YYYY-MM` month.
    #[error("Invalid month '{value}': expected YYYY-MM")]
    InvalidMonth {
        /// The rejected input.
        value: String,
    },

    /// A weekday name was not one of Monday through Friday.
    #[error("Invalid weekday '{value}': expected monday to friday")]
    InvalidWeekday {
        /// The rejected input.
        value: String,
    },

    /// The attendance store file could not be read or written.
    #[error("Attendance store I/O error on '{path}': {message}")]
    StoreIo {
        /// The store file path.
        path: String,
        /// The underlying I/O error message.
        message: String,
    },

    /// The attendance store file held malformed JSON.
    #[error("Failed to parse attendance store '{path}': {message}")]
    StoreParse {
        /// The store file path.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return AttendanceError.
pub type AttendanceResult<T> = Result<T, AttendanceError>;
