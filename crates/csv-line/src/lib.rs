//! Line-level CSV conversions.
//!
//! This crate provides the two halves of the comma-separated text format
//! at the granularity of a single line.
//!
//! # Modules
//!
//! - [`forward`] - field/record → escaped CSV text
//! - [`reverse`] - one CSV line → record (the tokenizer)
//!
//! # Example
//!
//! ```
//! use csv_line::{escape_record, tokenize};
//!
//! // Forward: record → CSV line
//! let line = escape_record(["a", "hello, world", ""]);
//! assert_eq!(line, "a,\"hello, world\",");
//!
//! // Reverse: CSV line → record
//! let record = tokenize(line.as_str()).unwrap();
//! assert_eq!(record, vec!["a", "hello, world", ""]);
//! ```

mod error;
pub mod forward;
pub mod reverse;

pub use error::TokenizeError;
pub use forward::{escape_field, escape_record, needs_quoting};
pub use reverse::{fields, next_field, tokenize, Fields};

/// One cell of tabular data, unescaped.
pub type Field = String;

/// One row: an ordered sequence of fields.
pub type Record = Vec<Field>;

/// An ordered sequence of records. Rows need not have equal lengths.
pub type Table = Vec<Record>;
