//! Error types for Ember

use thiserror::Error;

/// The main error type for Ember operations
#[derive(Debug, Error)]
pub enum EmberError {
    #[error("Invalid buffer capacity: {0} floats")]
    InvalidCapacity(usize),

    #[error("Buffer alignment error: {0}")]
    BufferAlignment(String),

    #[error("Buffer parity violation: {vertices} vertex floats vs {colors} color floats")]
    ParityViolation { vertices: usize, colors: usize },

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),
}

/// Result type alias for Ember operations
pub type Result<T> = std::result::Result<T, EmberError>;

impl From<toml::de::Error> for EmberError {
    fn from(err: toml::de::Error) -> Self {
        EmberError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for EmberError {
    fn from(err: toml::ser::Error) -> Self {
        EmberError::TomlSerError(err.to_string())
    }
}
