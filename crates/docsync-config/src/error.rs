//! Error types for run-profile validation.

use thiserror::Error;

/// Result alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Structured errors emitted while validating a run profile.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required field was empty.
    #[error("missing value for '{field}' in '{section}'")]
    MissingField {
        /// Profile section missing the field.
        section: &'static str,
        /// Name of the missing field.
        field: &'static str,
    },

    /// A field contained an invalid value.
    #[error("invalid value for '{field}' in '{section}': {message}")]
    InvalidField {
        /// Profile section that failed validation.
        section: &'static str,
        /// Field that failed validation.
        field: &'static str,
        /// Human-readable error description.
        message: String,
    },
}
