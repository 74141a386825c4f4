//! Resolved validation configuration.
//!
//! A [`ValidationConfig`] is built once per run (normally by the resolver in
//! `flatcheck_config`) and is read-only afterwards. The record validator only
//! ever sees a fully resolved value, so every field here is already coerced
//! and internally consistent.

use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Default input file, used when neither the config file nor the command line names one.
pub const DEFAULT_INPUT: &str = "input.txt";

/// Default report file.
pub const DEFAULT_REPORT: &str = "output.txt";

/// Default field delimiter.
pub const DEFAULT_DELIMITER: &str = ",";

/// Field count assumed when no valid `fields` setting is supplied.
pub const DEFAULT_FIELD_COUNT: usize = 1;

/// How the record terminator (`\n`) takes part in the checks.
///
/// Both flags default to `true`: the terminator counts as one character of the
/// record length and stays attached to the last field after splitting. This is
/// the historical behaviour of the checker, where a record like `",b,\n"`
/// splits into `["", "b", "\n"]` and its third field is therefore non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TerminatorPolicy {
    /// Count the terminator in the record length
    pub length_includes_terminator: bool,

    /// Keep the terminator on the last field when splitting
    pub fields_include_terminator: bool,
}

impl Default for TerminatorPolicy {
    fn default() -> Self {
        Self {
            length_includes_terminator: true,
            fields_include_terminator: true,
        }
    }
}

impl TerminatorPolicy {
    /// Policy that ignores the terminator for both length and field checks.
    pub fn excluded() -> Self {
        Self {
            length_includes_terminator: false,
            fields_include_terminator: false,
        }
    }
}

/// Fully resolved settings for one validation run.
///
/// # Example
///
/// ```rust
/// use flatcheck_core::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.delimiter, ",");
/// assert_eq!(config.expected_field_count, Some(1));
/// assert!(config.expected_record_length.is_none());
/// assert!(config.required_fields.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationConfig {
    /// File to validate
    pub input_path: PathBuf,

    /// File receiving one line per violation
    pub report_path: PathBuf,

    /// Field delimiter, never empty
    pub delimiter: String,

    /// Exact number of fields every record must split into
    pub expected_field_count: Option<usize>,

    /// Exact character length every record must have
    pub expected_record_length: Option<usize>,

    /// 1-based field positions that must hold a non-empty value
    pub required_fields: BTreeSet<usize>,

    /// Terminator handling for the length and field checks
    pub terminator: TerminatorPolicy,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            report_path: PathBuf::from(DEFAULT_REPORT),
            delimiter: DEFAULT_DELIMITER.to_string(),
            expected_field_count: Some(DEFAULT_FIELD_COUNT),
            expected_record_length: None,
            required_fields: BTreeSet::new(),
            terminator: TerminatorPolicy::default(),
        }
    }
}

impl ValidationConfig {
    /// Returns the input file path.
    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    /// Returns the report file path.
    pub fn report_path(&self) -> &Path {
        &self.report_path
    }

    /// Returns true if the required-fields check is enabled.
    pub fn checks_required_fields(&self) -> bool {
        !self.required_fields.is_empty()
    }
}
