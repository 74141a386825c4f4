//! Builder pattern for creating validation configurations.
//!
//! The builder starts from the built-in defaults and lets each layer overwrite
//! the settings it supplies. Values passed here are already typed; coercion of
//! raw configuration strings happens in the resolver.

use crate::{TerminatorPolicy, ValidationConfig};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Builder for creating a [`ValidationConfig`].
///
/// # Example
///
/// ```rust
/// use flatcheck_core::ValidationConfigBuilder;
///
/// let config = ValidationConfigBuilder::new()
///     .input("customers.txt")
///     .report("customers.rpt")
///     .delimiter("|")
///     .field_count(4)
///     .record_length(80)
///     .required_fields([1, 3])
///     .build();
///
/// assert_eq!(config.delimiter, "|");
/// assert_eq!(config.expected_field_count, Some(4));
/// assert_eq!(config.expected_record_length, Some(80));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidationConfigBuilder {
    config: ValidationConfig,
}

impl ValidationConfigBuilder {
    /// Creates a builder seeded with the built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder seeded with an existing configuration.
    pub fn from_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Sets the input file path.
    pub fn input(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input_path = path.into();
        self
    }

    /// Sets the report file path.
    pub fn report(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.report_path = path.into();
        self
    }

    /// Sets the field delimiter.
    ///
    /// An empty delimiter cannot split a record and is ignored, keeping the
    /// previous value.
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        let delimiter = delimiter.into();
        if !delimiter.is_empty() {
            self.config.delimiter = delimiter;
        }
        self
    }

    /// Sets the expected number of fields per record.
    pub fn field_count(mut self, count: usize) -> Self {
        self.config.expected_field_count = Some(count);
        self
    }

    /// Disables the field count check.
    pub fn no_field_count(mut self) -> Self {
        self.config.expected_field_count = None;
        self
    }

    /// Sets the expected record length in characters.
    pub fn record_length(mut self, length: usize) -> Self {
        self.config.expected_record_length = Some(length);
        self
    }

    /// Disables the record length check.
    pub fn no_record_length(mut self) -> Self {
        self.config.expected_record_length = None;
        self
    }

    /// Replaces the set of required 1-based field positions.
    pub fn required_fields(mut self, fields: impl IntoIterator<Item = usize>) -> Self {
        self.config.required_fields = fields.into_iter().collect::<BTreeSet<_>>();
        self
    }

    /// Disables the required-fields check.
    pub fn no_required_fields(mut self) -> Self {
        self.config.required_fields.clear();
        self
    }

    /// Sets the terminator handling policy.
    pub fn terminator(mut self, policy: TerminatorPolicy) -> Self {
        self.config.terminator = policy;
        self
    }

    /// Sets whether the terminator counts towards the record length.
    pub fn length_includes_terminator(mut self, include: bool) -> Self {
        self.config.terminator.length_includes_terminator = include;
        self
    }

    /// Sets whether the terminator stays attached to the last field.
    pub fn fields_include_terminator(mut self, include: bool) -> Self {
        self.config.terminator.fields_include_terminator = include;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> ValidationConfig {
        self.config
    }
}
