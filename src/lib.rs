//! csv-codec
//!
//! Converts comma-separated text into tables of string cells and back.
//!
//! # Features
//!
//! - Decode: text or a line source → table, one tokenized record per line
//! - Encode: table → line sink, with quoting and quote doubling where needed
//! - Round trip: decoding what [`encode`] wrote yields the original table
//! - File import/export with overwrite-or-append semantics
//!
//! # Line-Level Crate
//!
//! The tokenizer and escaper live in `csv_line` and are re-exported here.
//!
//! # Example
//!
//! ```
//! use csv_codec::{decode, encode};
//!
//! let table = vec![
//!     vec!["a".to_string(), "hello, world".to_string(), String::new()],
//!     vec!["\"quoted\"".to_string()],
//! ];
//!
//! let mut text = String::new();
//! encode(table.clone(), &mut text).unwrap();
//! assert_eq!(text, "a,\"hello, world\",\n\"\"\"quoted\"\"\"");
//!
//! assert_eq!(decode(text.as_str()).unwrap(), Some(table));
//! ```

mod decode;
mod encode;
mod error;
mod files;
mod options;
mod sink;

pub use decode::{decode, decode_reader, decode_stream};
pub use encode::{encode, encode_with};
pub use error::{CodecError, Result};
pub use files::{export_file, export_file_with, import_file};
pub use options::{ExportOptions, LineTerminator};
pub use sink::{LineSink, LineWriter};

pub use csv_line::{
    escape_field, escape_record, fields, needs_quoting, next_field, tokenize, Field, Fields,
    Record, Table, TokenizeError,
};
