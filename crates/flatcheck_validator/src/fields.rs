//! Field count check.

use flatcheck_core::{Record, RecordRule, Violation};

/// Checks that every record splits into exactly the expected number of fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCountRule {
    expected: usize,
}

impl FieldCountRule {
    /// Creates a new field count rule.
    pub fn new(expected: usize) -> Self {
        Self { expected }
    }
}

impl RecordRule for FieldCountRule {
    fn name(&self) -> &'static str {
        "fields"
    }

    fn check(&self, record: &Record<'_>, fields: &[&str], violations: &mut Vec<Violation>) {
        if fields.len() != self.expected {
            violations.push(Violation::FieldCountMismatch {
                actual: fields.len(),
                expected: self.expected,
                record: record.number(),
            });
        }
    }
}
