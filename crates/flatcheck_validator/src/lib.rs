//! # Flat File Checker Validator
//!
//! Validation engine for delimited flat files. This crate checks each record of
//! a file against a resolved [`ValidationConfig`](flatcheck_core::ValidationConfig):
//!
//! - Record length (characters, terminator handling per policy)
//! - Field count after splitting on the delimiter
//! - Required fields holding a non-empty value
//!
//! Violations are streamed to a [`ReportSink`] one line at a time, and the run
//! ends with a [`Summary`](flatcheck_core::Summary) of processed and flagged
//! records.
//!
//! ## Example
//!
//! ```rust
//! use flatcheck_core::{ValidationConfigBuilder, Violation};
//! use flatcheck_validator::RecordValidator;
//!
//! let config = ValidationConfigBuilder::new().field_count(2).build();
//! let validator = RecordValidator::new(config);
//!
//! let mut violations: Vec<Violation> = Vec::new();
//! let summary = validator.validate("a,b\nc\n".as_bytes(), &mut violations).unwrap();
//!
//! assert_eq!(summary.records_flagged, 1);
//! assert_eq!(violations[0].to_string(), "1 fields in record #2 expecting 2 fields.");
//! ```

mod engine;
mod error;
mod fields;
mod length;
mod reader;
mod report;
mod required;

pub use engine::*;
pub use error::*;
pub use fields::*;
pub use length::*;
pub use reader::*;
pub use report::*;
pub use required::*;
