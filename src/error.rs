//! Error types for the Call Budget Engine.
//!
//! The budget, burden, and schedule calculations are total functions and never
//! fail. Errors only arise at the edges of the crate: loading configuration and
//! validating adapter-layer input before it reaches the engine.

use thiserror::Error;

/// The main error type for the Call Budget Engine.
///
/// # Example
///
/// ```
/// use call_budget_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
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

    /// A schedule year outside the supported calendar range was requested.
    #[error("Invalid schedule year: {year}")]
    InvalidYear {
        /// The rejected year.
        year: i32,
    },

    /// A payment tier was invalid.
    #[error("Invalid tier '{tier_id}': {message}")]
    InvalidTier {
        /// The ID of the invalid tier.
        tier_id: String,
        /// A description of what made the tier invalid.
        message: String,
    },

    /// A provider record was invalid or contained inconsistent data.
    #[error("Invalid provider '{provider_id}': {message}")]
    InvalidProvider {
        /// The ID of the invalid provider.
        provider_id: String,
        /// A description of what made the provider invalid.
        message: String,
    },

    /// A call-volume assumption was out of range.
    #[error("Invalid assumption '{field}': {message}")]
    InvalidAssumption {
        /// The assumption field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
