//! # Flat File Checker Core
//!
//! Core data structures and types for the flat file format checker.
//!
//! A flat file is a delimited text file with one record per line. This crate
//! holds the pieces shared by the resolver and the validation engine:
//!
//! - **ValidationConfig**: the resolved, read-only rule set for one run
//! - **Violation**: a single rule failure, rendered as one report line
//! - **RecordResult** / **Summary**: per-record outcome and run counters
//! - **ConfigWarning**: non-fatal configuration problems
//!
//! ## Example
//!
//! ```rust
//! use flatcheck_core::{Record, ValidationConfigBuilder, Violation};
//!
//! let config = ValidationConfigBuilder::new()
//!     .delimiter(",")
//!     .field_count(3)
//!     .build();
//!
//! let record = Record::new(1, "a,b\n");
//! let fields = record.fields(&config.delimiter, config.terminator.fields_include_terminator);
//!
//! let violation = Violation::FieldCountMismatch {
//!     actual: fields.len(),
//!     expected: 3,
//!     record: record.number(),
//! };
//! assert_eq!(violation.to_string(), "2 fields in record #1 expecting 3 fields.");
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod validator;

pub use builder::*;
pub use config::*;
pub use error::*;
pub use validator::*;
