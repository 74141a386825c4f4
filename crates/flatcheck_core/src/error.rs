//! Warning types for configuration resolution.
//!
//! Configuration problems are never fatal. The resolver absorbs them, falls
//! back to a safe value and records one of these warnings so the caller can
//! surface it.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// What the resolver did with a setting it could not accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Fallback {
    /// The setting was reset to this default value
    Default(String),
    /// The check driven by the setting was turned off
    Disabled,
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fallback::Default(value) => write!(f, "continuing with default value of {value}"),
            Fallback::Disabled => write!(f, "no checking will be performed"),
        }
    }
}

/// Non-fatal problem found while resolving the configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConfigWarning {
    /// Configuration file missing, unreadable or containing bad lines
    #[error("Cannot open config file {} ({reason}) -- continuing with program defaults", path.display())]
    Load {
        /// File that could not be loaded
        path: PathBuf,
        /// Underlying cause
        reason: String,
    },

    /// A setting failed type validation
    #[error("Invalid value '{value}' for '{key}': {expected}; {fallback}")]
    InvalidValue {
        /// Configuration key
        key: String,
        /// Raw value as found in the file
        value: String,
        /// What a valid value looks like
        expected: String,
        /// What was used instead
        fallback: Fallback,
    },
}

impl ConfigWarning {
    /// Creates a new load warning.
    pub fn load(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Load {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Creates a warning for a value that was replaced by a default.
    pub fn reset(
        key: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
        default: impl ToString,
    ) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: value.into(),
            expected: expected.into(),
            fallback: Fallback::Default(default.to_string()),
        }
    }

    /// Creates a warning for a value that disabled its check.
    pub fn disabled(
        key: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: value.into(),
            expected: expected.into(),
            fallback: Fallback::Disabled,
        }
    }

    /// Returns the configuration key this warning refers to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigWarning::Load { .. } => None,
            ConfigWarning::InvalidValue { key, .. } => Some(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_load_message() {
        let warning = ConfigWarning::load("fileconf.ini", "No such file or directory");
        assert_eq!(
            warning.to_string(),
            "Cannot open config file fileconf.ini (No such file or directory) -- continuing with program defaults"
        );
        assert_eq!(warning.key(), None);
    }

    #[test]
    fn test_reset_message() {
        let warning = ConfigWarning::reset("fields", "three", "setting must be a number", 1);
        assert_eq!(
            warning.to_string(),
            "Invalid value 'three' for 'fields': setting must be a number; continuing with default value of 1"
        );
        assert_eq!(warning.key(), Some("fields"));
    }

    #[test]
    fn test_disabled_message() {
        let warning = ConfigWarning::disabled(
            "reqflds",
            "1,x",
            "setting must be a list of comma-separated numbers",
        );
        assert_eq!(
            warning.to_string(),
            "Invalid value '1,x' for 'reqflds': setting must be a list of comma-separated numbers; no checking will be performed"
        );
    }
}
