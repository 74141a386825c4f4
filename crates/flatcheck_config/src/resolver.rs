//! Layered configuration resolution.
//!
//! The [`Resolver`] merges three layers into one [`ValidationConfig`]:
//!
//! 1. built-in defaults
//! 2. configuration file values (flat namespace, last section wins)
//! 3. command-line overrides, which only exist for the input and report paths
//!
//! Nothing here is fatal. An unreadable file leaves the defaults in place, while
//! a file with bad lines still contributes every entry that parsed. A malformed
//! value either falls back to its default or disables its check. Each case
//! records a [`ConfigWarning`].

use crate::source::{RawSettings, load_file};
use flatcheck_core::{
    ConfigWarning, DEFAULT_DELIMITER, DEFAULT_FIELD_COUNT, ValidationConfig,
    ValidationConfigBuilder,
};
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::debug;

/// Recognised configuration keys.
pub mod keys {
    /// Input file path
    pub const INPUT: &str = "input";
    /// Report file path
    pub const REPORT: &str = "report";
    /// Field delimiter
    pub const DELIMITER: &str = "delimiter";
    /// Expected field count
    pub const FIELDS: &str = "fields";
    /// Required field positions
    pub const REQUIRED_FIELDS: &str = "reqflds";
    /// Expected record length
    pub const LENGTH: &str = "length";
    /// Count the terminator in the record length
    pub const LENGTH_TERMINATOR: &str = "length_terminator";
    /// Keep the terminator on the last field
    pub const FIELD_TERMINATOR: &str = "field_terminator";

    /// All keys the resolver understands.
    pub const ALL: [&str; 8] = [
        INPUT,
        REPORT,
        DELIMITER,
        FIELDS,
        REQUIRED_FIELDS,
        LENGTH,
        LENGTH_TERMINATOR,
        FIELD_TERMINATOR,
    ];
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Replaces the input path from every other layer
    pub input: Option<PathBuf>,

    /// Replaces the report path from every other layer
    pub report: Option<PathBuf>,
}

/// A resolved configuration plus the warnings raised while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// The configuration handed to the validator
    pub config: ValidationConfig,

    /// Warnings in the order they were raised
    pub warnings: Vec<ConfigWarning>,
}

/// Builds a [`ValidationConfig`] from defaults, a configuration file and overrides.
///
/// # Example
///
/// ```rust
/// use flatcheck_config::{Overrides, RawSettings, Resolver};
///
/// let settings: RawSettings = [("fields", "3"), ("reqflds", "1,3")].into_iter().collect();
/// let resolved = Resolver::new()
///     .overrides(Overrides {
///         input: Some("today.txt".into()),
///         report: None,
///     })
///     .resolve_settings(&settings);
///
/// assert!(resolved.warnings.is_empty());
/// assert_eq!(resolved.config.expected_field_count, Some(3));
/// assert_eq!(resolved.config.input_path.to_str(), Some("today.txt"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    defaults: ValidationConfig,
    config_file: Option<PathBuf>,
    overrides: Overrides,
}

impl Resolver {
    /// Creates a resolver using the built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the built-in defaults.
    pub fn defaults(mut self, defaults: ValidationConfig) -> Self {
        self.defaults = defaults;
        self
    }

    /// Sets the configuration file to read.
    pub fn config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Sets the command-line overrides.
    pub fn overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Reads the configuration file, if any, and resolves all layers.
    pub fn resolve(&self) -> Resolved {
        let mut warnings = Vec::new();

        let settings = match &self.config_file {
            Some(path) => match load_file(path) {
                Ok(loaded) => {
                    debug!(
                        "Loaded config file {} ({} sections, {} errors)",
                        path.display(),
                        loaded.file.sections().len(),
                        loaded.errors.len()
                    );
                    // Line errors are reported once, but every entry that
                    // parsed still applies.
                    if !loaded.errors.is_empty() {
                        let reason = loaded
                            .errors
                            .iter()
                            .map(ToString::to_string)
                            .collect::<Vec<_>>()
                            .join("; ");
                        let warning = ConfigWarning::load(path, reason);
                        debug!("{}", warning);
                        warnings.push(warning);
                    }
                    loaded.file.flatten()
                }
                Err(e) => {
                    let warning = ConfigWarning::load(path, e.to_string());
                    debug!("{}", warning);
                    warnings.push(warning);
                    RawSettings::default()
                }
            },
            None => RawSettings::default(),
        };

        let mut resolved = self.resolve_settings(&settings);
        warnings.append(&mut resolved.warnings);
        resolved.warnings = warnings;
        resolved
    }

    /// Resolves already-loaded settings against the defaults and overrides.
    pub fn resolve_settings(&self, settings: &RawSettings) -> Resolved {
        let mut warnings = Vec::new();
        let mut builder = ValidationConfigBuilder::from_config(self.defaults.clone());

        for key in settings.keys().filter(|k| !keys::ALL.contains(k)) {
            debug!("Ignoring unrecognised setting '{}'", key);
        }

        if let Some(input) = settings.get(keys::INPUT) {
            builder = builder.input(input);
        }
        if let Some(report) = settings.get(keys::REPORT) {
            builder = builder.report(report);
        }

        if let Some(raw) = settings.get(keys::DELIMITER) {
            if raw.is_empty() {
                warnings.push(ConfigWarning::reset(
                    keys::DELIMITER,
                    raw,
                    "delimiter must not be empty",
                    format!("'{DEFAULT_DELIMITER}'"),
                ));
                builder = builder.delimiter(DEFAULT_DELIMITER);
            } else {
                builder = builder.delimiter(raw);
            }
        }

        if let Some(raw) = settings.get(keys::FIELDS) {
            match parse_count(raw) {
                Some(count) => builder = builder.field_count(count),
                None => {
                    warnings.push(ConfigWarning::reset(
                        keys::FIELDS,
                        raw,
                        "setting must be a number",
                        DEFAULT_FIELD_COUNT,
                    ));
                    builder = builder.field_count(DEFAULT_FIELD_COUNT);
                }
            }
        }

        if let Some(raw) = settings.get(keys::LENGTH) {
            if raw.is_empty() {
                builder = builder.no_record_length();
            } else {
                match parse_count(raw) {
                    Some(length) => builder = builder.record_length(length),
                    None => {
                        warnings.push(ConfigWarning::disabled(
                            keys::LENGTH,
                            raw,
                            "setting must be a number",
                        ));
                        builder = builder.no_record_length();
                    }
                }
            }
        }

        if let Some(raw) = settings.get(keys::REQUIRED_FIELDS) {
            if raw.is_empty() {
                builder = builder.no_required_fields();
            } else {
                match parse_field_list(raw) {
                    Some(fields) => builder = builder.required_fields(fields),
                    None => {
                        warnings.push(ConfigWarning::disabled(
                            keys::REQUIRED_FIELDS,
                            raw,
                            "setting must be a list of comma-separated field numbers starting at 1",
                        ));
                        builder = builder.no_required_fields();
                    }
                }
            }
        }

        let terminator = self.defaults.terminator;
        if let Some(raw) = settings.get(keys::LENGTH_TERMINATOR) {
            let include = parse_flag(raw).unwrap_or_else(|| {
                warnings.push(ConfigWarning::reset(
                    keys::LENGTH_TERMINATOR,
                    raw,
                    "setting must be true or false",
                    terminator.length_includes_terminator,
                ));
                terminator.length_includes_terminator
            });
            builder = builder.length_includes_terminator(include);
        }
        if let Some(raw) = settings.get(keys::FIELD_TERMINATOR) {
            let include = parse_flag(raw).unwrap_or_else(|| {
                warnings.push(ConfigWarning::reset(
                    keys::FIELD_TERMINATOR,
                    raw,
                    "setting must be true or false",
                    terminator.fields_include_terminator,
                ));
                terminator.fields_include_terminator
            });
            builder = builder.fields_include_terminator(include);
        }

        // Only the paths can be overridden from the command line.
        if let Some(input) = &self.overrides.input {
            builder = builder.input(input.clone());
        }
        if let Some(report) = &self.overrides.report {
            builder = builder.report(report.clone());
        }

        let config = builder.build();
        debug!(
            "Resolved config: input={}, report={}, delimiter={:?}, fields={:?}, length={:?}, reqflds={:?}",
            config.input_path.display(),
            config.report_path.display(),
            config.delimiter,
            config.expected_field_count,
            config.expected_record_length,
            config.required_fields
        );
        for warning in &warnings {
            debug!("{}", warning);
        }

        Resolved { config, warnings }
    }
}

/// Parses a non-negative integer made only of ASCII digits.
pub fn parse_count(raw: &str) -> Option<usize> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Parses a comma-separated list of 1-based field positions.
///
/// Returns `None` if any element is not a positive integer; a partially valid
/// list is never accepted.
pub fn parse_field_list(raw: &str) -> Option<BTreeSet<usize>> {
    raw.split(',')
        .map(|part| part.trim().parse::<usize>().ok().filter(|&n| n >= 1))
        .collect()
}

/// Parses a boolean flag in any of the usual INI spellings.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "yes" | "true" | "on" => Some(true),
        "0" | "no" | "false" | "off" => Some(false),
        _ => None,
    }
}
