//! Main validation engine.
//!
//! This module provides the [`RecordValidator`] that applies every enabled rule
//! to each record, streams violations to a report sink and counts the results.

use crate::error::{Result, ValidatorError};
use crate::{FieldCountRule, LengthRule, RecordReader, ReportSink, RequiredFieldsRule, TextReport};
use flatcheck_core::{Record, RecordResult, RecordRule, Summary, ValidationConfig};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::time::Instant;
use tracing::{debug, info};

/// Validation engine for delimited flat files.
///
/// Rules run in a fixed order: record length, field count, required fields.
/// Every enabled rule sees every record, so one record can collect violations
/// from several rules.
///
/// # Example
///
/// ```rust
/// use flatcheck_core::ValidationConfigBuilder;
/// use flatcheck_validator::{RecordValidator, TextReport};
///
/// let config = ValidationConfigBuilder::new().field_count(3).required_fields([1]).build();
/// let validator = RecordValidator::new(config);
///
/// let mut report = TextReport::new(Vec::new());
/// let summary = validator
///     .validate("a,b,c\n,b\n".as_bytes(), &mut report)
///     .unwrap();
///
/// assert_eq!(summary.records_processed, 2);
/// assert_eq!(summary.records_flagged, 1);
/// assert_eq!(
///     String::from_utf8(report.into_inner()).unwrap(),
///     "2 fields in record #2 expecting 3 fields.\nField 1 in record #2 must have a value.\n"
/// );
/// ```
pub struct RecordValidator {
    config: ValidationConfig,
    rules: Vec<Box<dyn RecordRule>>,
}

impl RecordValidator {
    /// Creates a validator enforcing the rules enabled in `config`.
    pub fn new(config: ValidationConfig) -> Self {
        let mut rules: Vec<Box<dyn RecordRule>> = Vec::new();

        if let Some(length) = config.expected_record_length {
            rules.push(Box::new(LengthRule::new(
                length,
                config.terminator.length_includes_terminator,
            )));
        }
        if let Some(count) = config.expected_field_count {
            rules.push(Box::new(FieldCountRule::new(count)));
        }
        if config.checks_required_fields() {
            rules.push(Box::new(RequiredFieldsRule::new(
                config.required_fields.clone(),
            )));
        }

        Self { config, rules }
    }

    /// Returns the configuration this validator enforces.
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Returns the names of the enabled rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Checks a single record against every enabled rule.
    pub fn check_record(&self, record: &Record<'_>) -> RecordResult {
        let fields = record.fields(
            &self.config.delimiter,
            self.config.terminator.fields_include_terminator,
        );

        let mut result = RecordResult::new(record.number());
        for rule in &self.rules {
            rule.check(record, &fields, &mut result.violations);
        }
        result
    }

    /// Validates every record from `input`, writing violations to `sink`.
    ///
    /// Each violation is handed to the sink as soon as its record has been
    /// checked. The sink is finished before the summary is returned.
    pub fn validate<R: BufRead, S: ReportSink>(&self, input: R, sink: &mut S) -> Result<Summary> {
        let start = Instant::now();
        let mut reader = RecordReader::new(input);
        let mut summary = Summary::default();

        while let Some(record) = reader.next_record()? {
            let result = self.check_record(&record);

            if result.is_flagged() {
                debug!(
                    "Record #{} flagged with {} violation(s)",
                    result.record_number,
                    result.violations.len()
                );
                for violation in &result.violations {
                    sink.write_violation(violation)
                        .map_err(ValidatorError::Write)?;
                }
            }

            summary.add(&result);
        }

        sink.finish().map_err(ValidatorError::Write)?;
        summary.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            "Validated {} records, {} flagged ({} violations)",
            summary.records_processed, summary.records_flagged, summary.violations
        );
        Ok(summary)
    }

    /// Validates the configured input file into the configured report file.
    ///
    /// Both files are opened before any record is read; failing to open
    /// either one aborts the run.
    pub fn validate_file(&self) -> Result<Summary> {
        let input_path = self.config.input_path();
        let report_path = self.config.report_path();

        let input = File::open(input_path)
            .map_err(|e| ValidatorError::open_input(input_path, e))?;
        let report = File::create(report_path)
            .map_err(|e| ValidatorError::create_report(report_path, e))?;

        info!(
            "Validating {} (rules: {})",
            input_path.display(),
            self.rule_names().join(", ")
        );

        let mut sink = TextReport::new(BufWriter::new(report));
        self.validate(BufReader::new(input), &mut sink)
    }
}
