//! Error types for the Rent vs Buy Decision Agent
//!
//! The decision engine itself is pure arithmetic over pre-clamped input and
//! never fails; these errors cover the outer surfaces (argument parsing,
//! input files, serialization).

use thiserror::Error;

/// Main error type for decision operations
#[derive(Error, Debug)]
pub enum DecisionError {
    /// Invalid input data or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// File access or I/O error
    #[error("File error: {0}")]
    FileError(String),

    /// Input file parsing error
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DecisionError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        DecisionError::InvalidInput(msg.into())
    }

    /// Create a file error
    pub fn file_error(msg: impl Into<String>) -> Self {
        DecisionError::FileError(msg.into())
    }

    /// Create a parse error
    pub fn parse_error(msg: impl Into<String>) -> Self {
        DecisionError::ParseError(msg.into())
    }

    /// Check if this is a user-facing error (vs internal)
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            DecisionError::InvalidInput(_)
                | DecisionError::FileError(_)
                | DecisionError::ParseError(_)
        )
    }
}

impl From<std::io::Error> for DecisionError {
    fn from(err: std::io::Error) -> Self {
        DecisionError::FileError(err.to_string())
    }
}

impl From<serde_json::Error> for DecisionError {
    fn from(err: serde_json::Error) -> Self {
        DecisionError::ParseError(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for DecisionError {
    fn from(err: serde_yaml::Error) -> Self {
        DecisionError::ParseError(format!("YAML error: {}", err))
    }
}

impl From<toml::de::Error> for DecisionError {
    fn from(err: toml::de::Error) -> Self {
        DecisionError::ParseError(format!("TOML error: {}", err))
    }
}

/// Result type alias for decision operations
pub type Result<T> = std::result::Result<T, DecisionError>;
