//! Error types for validation runs.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a validation run.
///
/// Rule violations are never errors; they go to the report. Only I/O failures
/// end up here.
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// The input file could not be opened
    #[error("Cannot open input file {}: {source}", path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report file could not be created
    #[error("Cannot create report file {}: {source}", path.display())]
    CreateReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading a record failed, including invalid UTF-8 input
    #[error("Failed to read record #{record}: {source}")]
    Read {
        record: usize,
        #[source]
        source: std::io::Error,
    },

    /// Writing to the report failed
    #[error("Failed to write report: {0}")]
    Write(#[source] std::io::Error),
}

impl ValidatorError {
    /// Creates a new input open error.
    pub fn open_input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OpenInput {
            path: path.into(),
            source,
        }
    }

    /// Creates a new report creation error.
    pub fn create_report(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CreateReport {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for validation runs.
pub type Result<T> = std::result::Result<T, ValidatorError>;
