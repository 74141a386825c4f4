//! Configuration file sources.
//!
//! Every supported format is reduced to the same shape: an ordered list of
//! named sections holding string entries. Sections only group entries in the
//! file; [`ConfigFile::flatten`] merges them into one flat key namespace where
//! the last section in file order wins.

use crate::error::{ConfigError, Result};
use crate::ini::read_ini;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Section name used for top-level scalar entries of TOML and YAML files.
pub const ROOT_SECTION: &str = "root";

/// A named group of `key = value` entries, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Section name as written in the file
    pub name: String,

    entries: Vec<(String, String)>,
}

impl Section {
    /// Creates an empty section.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Adds or replaces an entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Appends a continuation line to an existing entry.
    pub fn append_to(&mut self, key: &str, text: &str) {
        if let Some((_, value)) = self.entries.iter_mut().find(|(k, _)| k == key) {
            value.push('\n');
            value.push_str(text);
        }
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates over entries in file order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns true if the section holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A parsed configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    defaults: Section,
    sections: Vec<Section>,
}

impl ConfigFile {
    /// Creates a file from its sections, with no inherited defaults.
    pub fn new(sections: Vec<Section>) -> Self {
        Self::with_defaults(Section::new(crate::ini::DEFAULT_SECTION), sections)
    }

    /// Creates a file whose `defaults` entries are visible in every section.
    pub fn with_defaults(defaults: Section, sections: Vec<Section>) -> Self {
        Self { defaults, sections }
    }

    /// Returns the sections in file order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Returns the inherited default entries.
    pub fn defaults(&self) -> &Section {
        &self.defaults
    }

    /// Merges all sections into one flat namespace.
    ///
    /// Sections are visited in file order and a later section overwrites keys
    /// set by an earlier one. Default entries only apply through a section: a
    /// file with defaults but no sections yields no settings.
    pub fn flatten(&self) -> RawSettings {
        let mut settings = RawSettings::default();

        for section in &self.sections {
            for (key, value) in self.defaults.entries() {
                if section.get(key).is_none() {
                    settings.set(key, value, &section.name);
                }
            }
            for (key, value) in section.entries() {
                settings.set(key, value, &section.name);
            }
        }

        settings
    }
}

/// Flat view of a configuration file's settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSettings {
    values: BTreeMap<String, (String, String)>,
}

impl RawSettings {
    /// Sets `key`, remembering which section supplied it.
    pub fn set(&mut self, key: &str, value: &str, section: &str) {
        self.values
            .insert(key.to_string(), (value.to_string(), section.to_string()));
    }

    /// Returns the raw value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|(v, _)| v.as_str())
    }

    /// Returns the section that supplied `key`.
    pub fn section_of(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|(_, s)| s.as_str())
    }

    /// Iterates over all keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Returns the number of settings.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no settings.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for RawSettings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut settings = RawSettings::default();
        for (key, value) in iter {
            settings.set(key.as_ref(), value.as_ref(), ROOT_SECTION);
        }
        settings
    }
}

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// INI format (.ini, .cfg, .conf and anything unrecognised)
    Ini,
    /// TOML format (.toml)
    Toml,
    /// YAML format (.yml, .yaml)
    Yaml,
}

/// Detect the configuration format from a file path based on its extension.
///
/// INI is the native format, so files without a recognised extension are read
/// as INI.
pub fn detect_format(path: &Path) -> ConfigFormat {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);

    match extension.as_deref() {
        Some("toml") => ConfigFormat::Toml,
        Some("yaml") | Some("yml") => ConfigFormat::Yaml,
        _ => ConfigFormat::Ini,
    }
}

/// Parse configuration from a TOML string.
///
/// Top-level tables become sections; top-level scalars form the
/// [`ROOT_SECTION`]. Arrays of scalars are joined with commas, so
/// `reqflds = [1, 3]` reads the same as `reqflds = 1,3` in INI.
pub fn parse_toml(content: &str) -> Result<ConfigFile> {
    let value: Value = toml::from_str(content).map_err(|e| ConfigError::Toml(e.to_string()))?;
    from_structured(value)
}

/// Parse configuration from a YAML string, with the same mapping as TOML.
pub fn parse_yaml(content: &str) -> Result<ConfigFile> {
    let value: Value = serde_yaml_ng::from_str(content)?;
    from_structured(value)
}

/// A configuration file plus the recoverable errors found while reading it.
///
/// Only INI files produce recoverable errors; a structured file either parses
/// completely or not at all.
#[derive(Debug)]
pub struct LoadedConfig {
    /// Every section and entry that parsed
    pub file: ConfigFile,

    /// Line errors, in file order
    pub errors: Vec<ConfigError>,
}

/// Read a configuration file with automatic format detection, keeping every
/// setting that parsed.
///
/// An unreadable file, a structured file that fails to parse, or an INI entry
/// before the first section header is an error.
pub fn load_file(path: &Path) -> Result<LoadedConfig> {
    let content = std::fs::read_to_string(path)?;

    match detect_format(path) {
        ConfigFormat::Ini => read_ini(&content),
        ConfigFormat::Toml => Ok(LoadedConfig {
            file: parse_toml(&content)?,
            errors: Vec::new(),
        }),
        ConfigFormat::Yaml => Ok(LoadedConfig {
            file: parse_yaml(&content)?,
            errors: Vec::new(),
        }),
    }
}

/// Parse a configuration file with automatic format detection.
///
/// Unlike [`load_file`], any line error fails the parse.
///
/// # Example
///
/// ```no_run
/// use flatcheck_config::parse_file;
/// use std::path::Path;
///
/// let file = parse_file(Path::new("fileconf.ini")).unwrap();
/// println!("{} settings", file.flatten().len());
/// ```
pub fn parse_file(path: &Path) -> Result<ConfigFile> {
    let loaded = load_file(path)?;
    match loaded.errors.into_iter().next() {
        Some(error) => Err(error),
        None => Ok(loaded.file),
    }
}

fn from_structured(value: Value) -> Result<ConfigFile> {
    let table = match value {
        Value::Object(table) => table,
        Value::Null => return Ok(ConfigFile::new(Vec::new())),
        _ => {
            return Err(ConfigError::unsupported(
                ROOT_SECTION,
                "expected a table of settings",
            ));
        }
    };

    let mut sections: Vec<Section> = Vec::new();
    // Top-level scalars between two tables form their own root section, so
    // they keep their place in file order.
    let mut in_root = false;

    for (name, value) in table {
        match value {
            Value::Object(entries) => {
                let mut section = Section::new(name.as_str());
                for (key, value) in entries {
                    let flat = flatten_scalar(&key, value)?;
                    section.insert(key.to_lowercase(), flat);
                }
                sections.push(section);
                in_root = false;
            }
            other => {
                let flat = flatten_scalar(&name, other)?;
                if !in_root {
                    sections.push(Section::new(ROOT_SECTION));
                    in_root = true;
                }
                if let Some(root) = sections.last_mut() {
                    root.insert(name.to_lowercase(), flat);
                }
            }
        }
    }

    Ok(ConfigFile::new(sections))
}

fn flatten_scalar(key: &str, value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        Value::Array(items) => {
            let parts = items
                .into_iter()
                .map(|item| match item {
                    Value::Array(_) | Value::Object(_) => Err(ConfigError::unsupported(
                        key,
                        "lists may only contain plain values",
                    )),
                    scalar => flatten_scalar(key, scalar),
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(parts.join(","))
        }
        Value::Object(_) => Err(ConfigError::unsupported(
            key,
            "nested tables are not supported",
        )),
    }
}
