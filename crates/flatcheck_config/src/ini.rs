//! INI reader.
//!
//! Supports the subset of the classic INI dialect the checker's configuration
//! files use:
//!
//! - `[section]` headers; every entry must live inside a section
//! - `key = value` and `key: value` entries, keys case-insensitive
//! - full-line comments starting with `#` or `;`
//! - indented continuation lines appended to the previous value
//! - a `[DEFAULT]` section whose entries are visible in every other section
//!
//! Duplicate sections, duplicate keys within one section and lines that are
//! neither a header nor an entry are errors. [`read_ini`] collects them and
//! keeps reading; [`parse_ini`] fails on the first one.

use crate::error::{ConfigError, Result};
use crate::source::{ConfigFile, LoadedConfig, Section};
use regex::Regex;
use std::sync::LazyLock;

/// Name of the section whose entries are inherited by all others.
pub const DEFAULT_SECTION: &str = "DEFAULT";

static SECTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(?P<header>[^\]]+)\]$").expect("valid section regex"));

static ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<key>[^=:\s][^=:]*?)\s*[=:]\s*(?P<value>.*)$").expect("valid entry regex")
});

/// Parse INI content into its sections, in file order.
///
/// Strict form of [`read_ini`]: the first line error fails the whole parse.
///
/// # Example
///
/// ```rust
/// use flatcheck_config::parse_ini;
///
/// let file = parse_ini("[layout]\nfields = 3\nreqflds = 1,3\n").unwrap();
/// let settings = file.flatten();
/// assert_eq!(settings.get("fields"), Some("3"));
/// assert_eq!(settings.get("reqflds"), Some("1,3"));
/// ```
pub fn parse_ini(content: &str) -> Result<ConfigFile> {
    let loaded = read_ini(content)?;
    match loaded.errors.into_iter().next() {
        Some(error) => Err(error),
        None => Ok(loaded.file),
    }
}

/// Read INI content, keeping every entry that parses.
///
/// Bad lines, duplicate sections and duplicate keys are collected in
/// [`LoadedConfig::errors`] and the rest of the file is still read. A
/// duplicate key keeps its first value; entries under a repeated section
/// header go to the first section of that name. Only an entry before the
/// first section header fails the read, since nothing after it can be trusted.
///
/// # Example
///
/// ```rust
/// use flatcheck_config::read_ini;
///
/// let loaded = read_ini("[layout]\nfields = 3\nstray line\nreqflds = 1\n").unwrap();
/// assert_eq!(loaded.errors.len(), 1);
///
/// let settings = loaded.file.flatten();
/// assert_eq!(settings.get("fields"), Some("3"));
/// assert_eq!(settings.get("reqflds"), Some("1"));
/// ```
pub fn read_ini(content: &str) -> Result<LoadedConfig> {
    let mut defaults = Section::new(DEFAULT_SECTION);
    let mut sections: Vec<Section> = Vec::new();
    let mut errors = Vec::new();
    let mut current: Option<usize> = None;
    let mut in_defaults = false;
    let mut last_key: Option<String> = None;

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            last_key = None;
            continue;
        }
        if trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        if raw.starts_with([' ', '\t']) {
            if let Some(key) = &last_key {
                let section = if in_defaults {
                    &mut defaults
                } else {
                    match current {
                        Some(i) => &mut sections[i],
                        None => {
                            return Err(ConfigError::ini(
                                line_no,
                                "continuation outside a section",
                            ));
                        }
                    }
                };
                section.append_to(key, trimmed);
                continue;
            }
        }

        if let Some(caps) = SECTION_HEADER.captures(trimmed) {
            let name = caps["header"].trim().to_string();
            last_key = None;

            if name == DEFAULT_SECTION {
                in_defaults = true;
                continue;
            }
            in_defaults = false;
            match sections.iter().position(|s| s.name == name) {
                Some(existing) => {
                    errors.push(ConfigError::ini(
                        line_no,
                        format!("section '{name}' already exists"),
                    ));
                    current = Some(existing);
                }
                None => {
                    sections.push(Section::new(name));
                    current = Some(sections.len() - 1);
                }
            }
            continue;
        }

        let Some(caps) = ENTRY.captures(trimmed) else {
            errors.push(ConfigError::ini(
                line_no,
                format!("expected 'key = value', found '{trimmed}'"),
            ));
            last_key = None;
            continue;
        };

        let key = caps["key"].trim().to_lowercase();
        let value = caps["value"].trim().to_string();

        let section = if in_defaults {
            &mut defaults
        } else {
            match current {
                Some(i) => &mut sections[i],
                None => {
                    return Err(ConfigError::ini(
                        line_no,
                        "entry found before the first section header",
                    ));
                }
            }
        };

        if section.get(&key).is_some() {
            errors.push(ConfigError::ini(
                line_no,
                format!("key '{key}' already exists in section '{}'", section.name),
            ));
            last_key = None;
            continue;
        }
        section.insert(key.clone(), value);
        last_key = Some(key);
    }

    Ok(LoadedConfig {
        file: ConfigFile::with_defaults(defaults, sections),
        errors,
    })
}
