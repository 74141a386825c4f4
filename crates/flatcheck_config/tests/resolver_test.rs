//! End-to-end resolution from configuration files on disk.

use flatcheck_config::{Overrides, Resolver};
use flatcheck_core::{ConfigWarning, Fallback};
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write config file");
    path
}

#[test]
fn test_ini_file_resolves_every_setting() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "fileconf.ini",
        "\
[files]
input = orders.txt
report = orders.rpt

[layout]
delimiter = ;
fields = 3
length = 12
reqflds = 1,3
",
    );

    let resolved = Resolver::new().config_file(&path).resolve();
    let config = resolved.config;

    assert!(resolved.warnings.is_empty(), "{:?}", resolved.warnings);
    assert_eq!(config.input_path, Path::new("orders.txt"));
    assert_eq!(config.report_path, Path::new("orders.rpt"));
    assert_eq!(config.delimiter, ";");
    assert_eq!(config.expected_field_count, Some(3));
    assert_eq!(config.expected_record_length, Some(12));
    assert_eq!(config.required_fields, BTreeSet::from([1, 3]));
}

#[test]
fn test_later_section_wins_for_duplicate_keys() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "fileconf.ini",
        "[one]\nfields = 2\ndelimiter = |\n[two]\nfields = 6\n",
    );

    let config = Resolver::new().config_file(&path).resolve().config;
    assert_eq!(config.expected_field_count, Some(6));
    assert_eq!(config.delimiter, "|");
}

#[test]
fn test_unreadable_config_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.ini");

    let resolved = Resolver::new().config_file(&missing).resolve();

    assert_eq!(resolved.config.input_path, Path::new("input.txt"));
    assert_eq!(resolved.config.report_path, Path::new("output.txt"));
    assert_eq!(resolved.config.expected_field_count, Some(1));
    assert_eq!(resolved.warnings.len(), 1);
    match &resolved.warnings[0] {
        ConfigWarning::Load { path, .. } => assert_eq!(path, &missing),
        other => panic!("unexpected warning: {other:?}"),
    }
}

#[test]
fn test_malformed_ini_is_a_load_warning() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "fileconf.ini", "fields = 3\n");

    let resolved = Resolver::new().config_file(&path).resolve();
    assert!(matches!(resolved.warnings[0], ConfigWarning::Load { .. }));
    assert_eq!(resolved.config.expected_field_count, Some(1));
}

#[test]
fn test_bad_line_keeps_parsed_settings() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "fileconf.ini",
        "[layout]\ndelimiter = |\nfields = 3\nreqflds = 1\nstray line\n",
    );

    let resolved = Resolver::new().config_file(&path).resolve();

    assert_eq!(resolved.warnings.len(), 1);
    match &resolved.warnings[0] {
        ConfigWarning::Load { reason, .. } => assert!(reason.contains("line 5"), "{reason}"),
        other => panic!("unexpected warning: {other:?}"),
    }
    assert_eq!(resolved.config.delimiter, "|");
    assert_eq!(resolved.config.expected_field_count, Some(3));
    assert_eq!(resolved.config.required_fields, BTreeSet::from([1]));
}

#[test]
fn test_toml_tables_resolve_in_file_order() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "layout.toml",
        "[zeta]\nfields = 2\n\n[alpha]\nfields = 5\n",
    );

    let resolved = Resolver::new().config_file(&path).resolve();
    assert!(resolved.warnings.is_empty(), "{:?}", resolved.warnings);
    assert_eq!(resolved.config.expected_field_count, Some(5));
}

#[test]
fn test_invalid_values_each_warn() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "fileconf.ini",
        "[layout]\nfields = many\nlength = long\nreqflds = 1,two\n",
    );

    let resolved = Resolver::new().config_file(&path).resolve();
    let config = &resolved.config;

    assert_eq!(config.expected_field_count, Some(1));
    assert_eq!(config.expected_record_length, None);
    assert!(config.required_fields.is_empty());

    let keys: Vec<_> = resolved.warnings.iter().filter_map(|w| w.key()).collect();
    assert_eq!(keys, vec!["fields", "length", "reqflds"]);
    assert!(matches!(
        &resolved.warnings[0],
        ConfigWarning::InvalidValue {
            fallback: Fallback::Default(v),
            ..
        } if v == "1"
    ));
}

#[test]
fn test_cli_overrides_file_paths() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "fileconf.ini",
        "[files]\ninput = from-file.txt\nreport = from-file.rpt\n",
    );

    let config = Resolver::new()
        .config_file(&path)
        .overrides(Overrides {
            input: None,
            report: Some("from-cli.rpt".into()),
        })
        .resolve()
        .config;

    assert_eq!(config.input_path, Path::new("from-file.txt"));
    assert_eq!(config.report_path, Path::new("from-cli.rpt"));
}

#[test]
fn test_toml_config_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "layout.toml",
        r#"
[layout]
delimiter = "|"
fields = 4
reqflds = [2, 4]
length_terminator = false
"#,
    );

    let resolved = Resolver::new().config_file(&path).resolve();

    assert!(resolved.warnings.is_empty(), "{:?}", resolved.warnings);
    assert_eq!(resolved.config.delimiter, "|");
    assert_eq!(resolved.config.expected_field_count, Some(4));
    assert_eq!(resolved.config.required_fields, BTreeSet::from([2, 4]));
    assert!(!resolved.config.terminator.length_includes_terminator);
}

#[test]
fn test_yaml_config_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "layout.yaml", "layout:\n  fields: 2\n  length: 8\n");

    let resolved = Resolver::new().config_file(&path).resolve();

    assert!(resolved.warnings.is_empty(), "{:?}", resolved.warnings);
    assert_eq!(resolved.config.expected_field_count, Some(2));
    assert_eq!(resolved.config.expected_record_length, Some(8));
}
