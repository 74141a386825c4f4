//! File-level validation runs: configuration on disk, input on disk, report on disk.

use flatcheck_config::{Overrides, Resolver};
use flatcheck_core::{ValidationConfigBuilder, Violation};
use flatcheck_validator::{RecordValidator, ValidatorError};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

const INPUT: &str = "\
1001,Alice,alice@example.com
1002,,bob@example.com
1003,Carol
,Dave,dave@example.com
1005,Eve,eve@example.com,extra
";

fn setup(dir: &TempDir, config: &str) -> RecordValidator {
    let config_path = dir.path().join("fileconf.ini");
    fs::write(&config_path, config).unwrap();
    fs::write(dir.path().join("customers.txt"), INPUT).unwrap();

    let resolved = Resolver::new()
        .config_file(&config_path)
        .overrides(Overrides {
            input: Some(dir.path().join("customers.txt")),
            report: Some(dir.path().join("customers.rpt")),
        })
        .resolve();
    assert!(resolved.warnings.is_empty(), "{:?}", resolved.warnings);

    RecordValidator::new(resolved.config)
}

#[test]
fn test_report_file_contents() {
    let dir = TempDir::new().unwrap();
    let validator = setup(&dir, "[layout]\nfields = 3\nreqflds = 1,2\n");

    let summary = validator.validate_file().expect("validation should succeed");
    let report = fs::read_to_string(dir.path().join("customers.rpt")).unwrap();

    assert_eq!(
        report,
        "\
Field 2 in record #2 must have a value.
2 fields in record #3 expecting 3 fields.
Field 1 in record #4 must have a value.
4 fields in record #5 expecting 3 fields.
"
    );
    assert_eq!(summary.records_processed, 5);
    assert_eq!(summary.records_flagged, 4);
    assert_eq!(summary.violations, 4);
}

#[test]
fn test_flagged_never_exceeds_processed() {
    let dir = TempDir::new().unwrap();
    let validator = setup(&dir, "[layout]\nfields = 3\nlength = 29\nreqflds = 1,2,3\n");

    let summary = validator.validate_file().unwrap();
    let report = fs::read_to_string(dir.path().join("customers.rpt")).unwrap();

    assert!(summary.records_flagged <= summary.records_processed);
    assert_eq!(summary.violations, report.lines().count());

    let flagged_records: std::collections::BTreeSet<&str> = report
        .lines()
        .filter_map(|line| line.split('#').nth(1))
        .filter_map(|rest| rest.split_whitespace().next())
        .collect();
    assert_eq!(flagged_records.len(), summary.records_flagged);
}

#[test]
fn test_repeated_runs_produce_identical_reports() {
    let dir = TempDir::new().unwrap();
    let validator = setup(&dir, "[layout]\nfields = 3\nlength = 25\nreqflds = 1,2\n");
    let report_path = dir.path().join("customers.rpt");

    let first_summary = validator.validate_file().unwrap();
    let first = fs::read(&report_path).unwrap();
    let second_summary = validator.validate_file().unwrap();
    let second = fs::read(&report_path).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_summary.records_flagged, second_summary.records_flagged);
}

#[test]
fn test_invalid_required_fields_produce_no_required_violations() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("fileconf.ini");
    fs::write(&config_path, "[layout]\nfields = 3\nreqflds = 1,b\n").unwrap();
    fs::write(dir.path().join("customers.txt"), INPUT).unwrap();

    let resolved = Resolver::new()
        .config_file(&config_path)
        .overrides(Overrides {
            input: Some(dir.path().join("customers.txt")),
            report: Some(dir.path().join("customers.rpt")),
        })
        .resolve();
    assert_eq!(resolved.warnings.len(), 1);

    let validator = RecordValidator::new(resolved.config);
    let mut violations: Vec<Violation> = Vec::new();
    validator.validate(INPUT.as_bytes(), &mut violations).unwrap();

    assert!(violations.iter().all(|v| matches!(v, Violation::FieldCountMismatch { .. })));
}

#[test]
fn test_crlf_input_measures_terminator_as_one_character() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("dos.txt");
    let report = dir.path().join("dos.rpt");
    fs::write(&input, "abc\r\nabcd\r\n").unwrap();

    let config = ValidationConfigBuilder::new()
        .input(&input)
        .report(&report)
        .record_length(4)
        .build();
    let summary = RecordValidator::new(config).validate_file().unwrap();

    assert_eq!(summary.records_flagged, 1);
    assert_eq!(
        fs::read_to_string(&report).unwrap(),
        "5 characters in record #2 expecting 4 characters.\n"
    );
}

#[test]
fn test_missing_input_is_fatal() {
    let dir = TempDir::new().unwrap();
    let report = dir.path().join("never.rpt");
    let config = ValidationConfigBuilder::new()
        .input(dir.path().join("absent.txt"))
        .report(&report)
        .build();

    let err = RecordValidator::new(config).validate_file().unwrap_err();
    assert!(matches!(err, ValidatorError::OpenInput { .. }));
    assert!(!report.exists(), "report must not be created when input is missing");
}

#[test]
fn test_unwritable_report_is_fatal() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.txt");
    fs::write(&input, "a\n").unwrap();

    let config = ValidationConfigBuilder::new()
        .input(&input)
        .report(dir.path().join("no-such-dir").join("out.rpt"))
        .build();

    let err = RecordValidator::new(config).validate_file().unwrap_err();
    assert!(matches!(err, ValidatorError::CreateReport { .. }));
}

#[test]
fn test_clean_file_writes_empty_report() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.txt");
    let report = dir.path().join("out.rpt");
    fs::write(&input, "a,b\nc,d\n").unwrap();

    let config = ValidationConfigBuilder::new()
        .input(&input)
        .report(&report)
        .field_count(2)
        .build();
    let summary = RecordValidator::new(config).validate_file().unwrap();

    assert_eq!(summary.records_processed, 2);
    assert!(!summary.has_flagged());
    assert_eq!(fs::read_to_string(&report).unwrap(), "");
}
