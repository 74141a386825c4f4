//! Record length check.

use flatcheck_core::{Record, RecordRule, Violation};

/// Checks that every record has exactly the expected number of characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRule {
    expected: usize,
    include_terminator: bool,
}

impl LengthRule {
    /// Creates a new length rule.
    pub fn new(expected: usize, include_terminator: bool) -> Self {
        Self {
            expected,
            include_terminator,
        }
    }
}

impl RecordRule for LengthRule {
    fn name(&self) -> &'static str {
        "length"
    }

    fn check(&self, record: &Record<'_>, _fields: &[&str], violations: &mut Vec<Violation>) {
        let actual = record.char_len(self.include_terminator);
        if actual != self.expected {
            violations.push(Violation::LengthMismatch {
                actual,
                expected: self.expected,
                record: record.number(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn check(rule: LengthRule, text: &str) -> Vec<Violation> {
        let mut violations = Vec::new();
        rule.check(&Record::new(1, text), &[], &mut violations);
        violations
    }

    #[test]
    fn test_terminator_counted() {
        assert_eq!(
            check(LengthRule::new(5, true), "ab\n"),
            vec![Violation::LengthMismatch {
                actual: 3,
                expected: 5,
                record: 1
            }]
        );
        assert!(check(LengthRule::new(3, true), "ab\n").is_empty());
    }

    #[test]
    fn test_terminator_excluded() {
        assert!(check(LengthRule::new(2, false), "ab\n").is_empty());
        assert_eq!(check(LengthRule::new(3, false), "ab\n").len(), 1);
    }

    #[test]
    fn test_unterminated_last_record() {
        assert_eq!(
            check(LengthRule::new(3, true), "ab"),
            vec![Violation::LengthMismatch {
                actual: 2,
                expected: 3,
                record: 1
            }]
        );
    }
}
