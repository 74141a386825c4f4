//! Required field check.
//!
//! A required position that does not exist in the record is reported as
//! [`Violation::RequiredFieldOutOfRange`] rather than skipped: such a record
//! has already failed the field count, and its missing field has no value.

use flatcheck_core::{Record, RecordRule, Violation};
use std::collections::BTreeSet;

/// Checks that the configured 1-based field positions are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredFieldsRule {
    fields: BTreeSet<usize>,
}

impl RequiredFieldsRule {
    /// Creates a new required fields rule.
    pub fn new(fields: BTreeSet<usize>) -> Self {
        Self { fields }
    }
}

impl RecordRule for RequiredFieldsRule {
    fn name(&self) -> &'static str {
        "reqflds"
    }

    fn check(&self, record: &Record<'_>, fields: &[&str], violations: &mut Vec<Violation>) {
        for &field in &self.fields {
            match field.checked_sub(1).and_then(|idx| fields.get(idx)) {
                Some(value) if value.is_empty() => {
                    violations.push(Violation::MissingRequiredField {
                        field,
                        record: record.number(),
                    });
                }
                Some(_) => {}
                None => {
                    violations.push(Violation::RequiredFieldOutOfRange {
                        field,
                        field_count: fields.len(),
                        record: record.number(),
                    });
                }
            }
        }
    }
}
