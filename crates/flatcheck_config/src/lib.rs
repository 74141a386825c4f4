//! Configuration loading for the flat file checker.
//!
//! This crate reads the checker's configuration file and resolves it, together
//! with built-in defaults and command-line overrides, into a single
//! [`ValidationConfig`](flatcheck_core::ValidationConfig).
//!
//! The native format is INI. Files ending in `.toml`, `.yaml` or `.yml` are
//! read with the matching parser and mapped onto the same flat key namespace.
//!
//! # Example
//!
//! ```rust
//! use flatcheck_config::{parse_ini, Resolver};
//!
//! let ini = r#"
//! [files]
//! input = accounts.txt
//! report = accounts.rpt
//!
//! [layout]
//! delimiter = |
//! fields = 5
//! reqflds = 1,2
//! "#;
//!
//! let settings = parse_ini(ini).expect("Failed to parse config").flatten();
//! let resolved = Resolver::new().resolve_settings(&settings);
//!
//! assert_eq!(resolved.config.delimiter, "|");
//! assert_eq!(resolved.config.expected_field_count, Some(5));
//! assert!(resolved.warnings.is_empty());
//! ```

mod error;
mod ini;
mod resolver;
mod source;

pub use error::*;
pub use ini::*;
pub use resolver::*;
pub use source::*;
