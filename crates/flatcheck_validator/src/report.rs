//! Report sinks.
//!
//! The validator hands every violation to a [`ReportSink`] as soon as it is
//! found. [`TextReport`] writes the classic one-line-per-violation report;
//! a `Vec<Violation>` collects them in memory.

use flatcheck_core::Violation;
use std::io::{self, Write};

/// Destination for violations, in record order.
pub trait ReportSink {
    /// Records one violation.
    fn write_violation(&mut self, violation: &Violation) -> io::Result<()>;

    /// Called once after the last record.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Plain-text report: one violation per line.
#[derive(Debug)]
pub struct TextReport<W: Write> {
    writer: W,
}

impl<W: Write> TextReport<W> {
    /// Creates a report writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for TextReport<W> {
    fn write_violation(&mut self, violation: &Violation) -> io::Result<()> {
        writeln!(self.writer, "{violation}")
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl ReportSink for Vec<Violation> {
    fn write_violation(&mut self, violation: &Violation) -> io::Result<()> {
        self.push(violation.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_report_lines() {
        let mut report = TextReport::new(Vec::new());
        report
            .write_violation(&Violation::FieldCountMismatch {
                actual: 2,
                expected: 3,
                record: 1,
            })
            .unwrap();
        report
            .write_violation(&Violation::MissingRequiredField {
                field: 1,
                record: 1,
            })
            .unwrap();
        report.finish().unwrap();

        let text = String::from_utf8(report.into_inner()).unwrap();
        assert_eq!(
            text,
            "2 fields in record #1 expecting 3 fields.\nField 1 in record #1 must have a value.\n"
        );
    }
}
