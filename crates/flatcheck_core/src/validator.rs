//! Record, violation and summary types shared by the validation engine.
//!
//! This module defines the [`RecordRule`] trait implemented by each check, the
//! [`Violation`] variants those checks produce, and the per-run [`Summary`].
//! The `Display` output of a [`Violation`] is the exact line written to the
//! report file.

use serde::Serialize;
use std::fmt;

/// A single line of the input file.
///
/// The text is normalised by the reader: a terminated record ends in exactly
/// one `\n`, whatever line ending the file used. The last record of a file may
/// have no terminator at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    number: usize,
    text: &'a str,
}

impl<'a> Record<'a> {
    /// Creates a record from its 1-based number and normalised text.
    pub fn new(number: usize, text: &'a str) -> Self {
        Self { number, text }
    }

    /// Returns the 1-based record number.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Returns the full text, terminator included.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Returns the text without its terminator.
    pub fn body(&self) -> &'a str {
        self.text.strip_suffix('\n').unwrap_or(self.text)
    }

    /// Returns true if the record ended with a line terminator.
    pub fn is_terminated(&self) -> bool {
        self.text.ends_with('\n')
    }

    /// Length in characters, optionally counting the terminator as one.
    pub fn char_len(&self, include_terminator: bool) -> usize {
        if include_terminator {
            self.text.chars().count()
        } else {
            self.body().chars().count()
        }
    }

    /// Splits the record on `delimiter`.
    ///
    /// With `include_terminator` the terminator stays on the last field, so
    /// `",b,\n"` yields `["", "b", "\n"]`.
    pub fn fields(&self, delimiter: &str, include_terminator: bool) -> Vec<&'a str> {
        let source = if include_terminator {
            self.text
        } else {
            self.body()
        };
        source.split(delimiter).collect()
    }
}

/// A single rule failure on one record.
///
/// The `Display` impl renders the report line, without the trailing newline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Violation {
    /// Record length differs from the configured length
    LengthMismatch {
        actual: usize,
        expected: usize,
        record: usize,
    },

    /// Record splits into the wrong number of fields
    FieldCountMismatch {
        actual: usize,
        expected: usize,
        record: usize,
    },

    /// A required field is present but empty
    MissingRequiredField { field: usize, record: usize },

    /// A required field lies beyond the fields the record actually has
    RequiredFieldOutOfRange {
        field: usize,
        field_count: usize,
        record: usize,
    },
}

impl Violation {
    /// Returns the record number this violation belongs to.
    pub fn record(&self) -> usize {
        match self {
            Violation::LengthMismatch { record, .. }
            | Violation::FieldCountMismatch { record, .. }
            | Violation::MissingRequiredField { record, .. }
            | Violation::RequiredFieldOutOfRange { record, .. } => *record,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::LengthMismatch {
                actual,
                expected,
                record,
            } => write!(
                f,
                "{actual} characters in record #{record} expecting {expected} characters."
            ),
            Violation::FieldCountMismatch {
                actual,
                expected,
                record,
            } => write!(
                f,
                "{actual} fields in record #{record} expecting {expected} fields."
            ),
            // An out-of-range field has no value either; both share the report line.
            Violation::MissingRequiredField { field, record }
            | Violation::RequiredFieldOutOfRange { field, record, .. } => {
                write!(f, "Field {field} in record #{record} must have a value.")
            }
        }
    }
}

/// Outcome of checking one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordResult {
    /// 1-based record number
    pub record_number: usize,

    /// Violations in rule evaluation order
    pub violations: Vec<Violation>,
}

impl RecordResult {
    /// Creates an empty result for a record.
    pub fn new(record_number: usize) -> Self {
        Self {
            record_number,
            violations: Vec::new(),
        }
    }

    /// Returns true if the record broke at least one rule.
    pub fn is_flagged(&self) -> bool {
        !self.violations.is_empty()
    }
}

/// Counters accumulated over a validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Number of records read
    pub records_processed: usize,

    /// Number of records with at least one violation
    pub records_flagged: usize,

    /// Number of violation lines written to the report
    pub violations: usize,

    /// Wall-clock duration of the run in milliseconds
    pub duration_ms: u64,
}

impl Summary {
    /// Folds one record's result into the counters.
    pub fn add(&mut self, result: &RecordResult) {
        self.records_processed += 1;
        self.violations += result.violations.len();
        if result.is_flagged() {
            self.records_flagged += 1;
        }
    }

    /// Returns true if any record was flagged.
    pub fn has_flagged(&self) -> bool {
        self.records_flagged > 0
    }
}

/// A check applied to every record.
///
/// Rules are independent: each one sees the record and its split fields and
/// appends whatever violations it finds. None of them may stop another from
/// running.
pub trait RecordRule: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Checks one record, appending violations in evaluation order.
    fn check(&self, record: &Record<'_>, fields: &[&str], violations: &mut Vec<Violation>);
}
