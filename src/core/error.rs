//! Error types for pathignore

use glob::PatternError;
use thiserror::Error;

/// Main error type for pattern compilation and configuration
#[derive(Error, Debug)]
pub enum PathIgnoreError {
    /// A glob expression could not be compiled
    #[error("Invalid glob pattern \"{pattern}\": {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: PatternError,
    },

    /// Configuration errors
    #[error("Configuration error: {reason}")]
    ConfigurationError { reason: String },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PathIgnoreError {
    /// Create a new invalid pattern error
    pub fn invalid_pattern(pattern: impl Into<String>, source: PatternError) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::ConfigurationError {
            reason: reason.into(),
        }
    }
}

/// Result type alias for pathignore operations
pub type Result<T> = std::result::Result<T, PathIgnoreError>;
