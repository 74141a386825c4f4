//! Error types for configuration file parsing.

use thiserror::Error;

/// Errors that can occur while reading a configuration file.
///
/// None of these abort a run: the resolver turns them into a
/// [`ConfigWarning::Load`](flatcheck_core::ConfigWarning::Load) and carries on
/// with the built-in defaults.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed INI content
    #[error("Failed to parse INI at line {line}: {message}")]
    Ini { line: usize, message: String },

    /// TOML parsing failed
    #[error("Failed to parse TOML: {0}")]
    Toml(String),

    /// YAML parsing failed
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// A structured file held a value that has no flat string form
    #[error("Unsupported value for '{key}': {message}")]
    UnsupportedValue { key: String, message: String },
}

impl ConfigError {
    /// Creates a new INI syntax error.
    pub fn ini(line: usize, message: impl Into<String>) -> Self {
        Self::Ini {
            line,
            message: message.into(),
        }
    }

    /// Creates a new unsupported value error.
    pub fn unsupported(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UnsupportedValue {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for configuration parsing.
pub type Result<T> = std::result::Result<T, ConfigError>;
