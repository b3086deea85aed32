//! Error types for the Pay Package Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculation core itself never fails for well-formed input; errors
//! come from loading configuration, validating a contract before it reaches
//! the calculator, and the per-diem lookup (which is always absorbed into
//! the standard-rate fallback).

use thiserror::Error;

/// The main error type for the Pay Package Engine.
///
/// # Example
///
/// ```
/// use pay_package_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/calculator.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/calculator.yaml");
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

    /// Configuration parsed but violates an invariant.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What was wrong with the configuration.
        message: String,
    },

    /// A contract failed caller-side validation.
    #[error("Invalid contract field '{field}': {message}")]
    InvalidContract {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The per-diem rate lookup failed.
    #[error("Rate lookup failed: {message}")]
    RateLookup {
        /// A description of the lookup failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

impl From<reqwest::Error> for EngineError {
    fn from(error: reqwest::Error) -> Self {
        EngineError::RateLookup {
            message: error.to_string(),
        }
    }
}
